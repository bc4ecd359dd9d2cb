//! Scoped stylesheet emission
//!
//! The whole sheet lives under the per-compilation wrapper id so generated
//! forms neither leak styling onto a host page nor inherit from it. Color
//! tokens become CSS custom properties; structural values (spacing, borders,
//! the 640px/768px breakpoints) are fixed.

use crate::config::StyleConfig;

const SCOPE: &str = "__SCOPE__";

const STYLE_TEMPLATE: &str = r#"
    @import url('https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap');

    #__SCOPE__, #__SCOPE__ * {
      all: revert;
      box-sizing: border-box;
      font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;
    }

    #__SCOPE__ {
      --primary-color: __PRIMARY__;
      --button-text-color: __BUTTON_TEXT__;
      --text-color: __TEXT__;
      --label-color: __LABEL__;
      --form-bg: __FORM_BG__;

      --border-color: #cbd5e1;
      --border-color-light: #e2e8f0;
      --error-color: #ef4444;
      --success-color: #22c55e;
      --input-bg: #f8fafc;
      width: 100%;
      max-width: 700px;
      margin: 1rem auto;
    }

    #__SCOPE__ form {
      padding: 1.5rem;
      border: 1px solid var(--border-color-light);
      border-radius: 1rem;
      background: var(--form-bg);
      box-shadow: 0 10px 15px -3px rgb(0 0 0 / 0.07), 0 4px 6px -4px rgb(0 0 0 / 0.1);
      overflow: hidden;
    }
    @media (min-width: 640px) { #__SCOPE__ form { padding: 2.5rem; } }

    #__SCOPE__ h2 {
      margin: 0 0 2rem 0;
      padding: 0;
      color: var(--text-color);
      text-align: center;
      font-size: 1.75rem;
      font-weight: 700;
    }

    #__SCOPE__ .form-grid {
      display: grid;
      grid-template-columns: 1fr;
      gap: 1.25rem;
    }
    @media (min-width: 768px) {
      #__SCOPE__ .form-grid {
        grid-template-columns: 1fr 1fr;
        gap: 1.25rem 1.5rem;
      }
    }

    #__SCOPE__ .form-group { display: flex; flex-direction: column; }

    #__SCOPE__ label {
      display: block;
      margin-bottom: 0.5rem;
      font-weight: 500;
      color: var(--label-color);
      font-size: 0.875rem;
    }

    #__SCOPE__ .required-asterisk { color: var(--error-color); }

    #__SCOPE__ input, #__SCOPE__ select, #__SCOPE__ textarea {
      width: 100%;
      padding: 0.75rem;
      border: 1px solid var(--border-color);
      border-radius: 0.5rem;
      font-size: 1rem;
      background-color: var(--input-bg);
      transition: border-color 0.2s, box-shadow 0.2s;
      color: var(--text-color);
    }
    #__SCOPE__ textarea { min-height: 100px; }

    #__SCOPE__ input::placeholder { color: #94a3b8; }

    #__SCOPE__ input:focus, #__SCOPE__ select:focus, #__SCOPE__ textarea:focus {
      outline: none;
      border-color: var(--primary-color);
      box-shadow: 0 0 0 3px color-mix(in srgb, var(--primary-color) 25%, transparent);
    }

    #__SCOPE__ .radio-group label, #__SCOPE__ .checkbox-group label { margin-bottom: 0.5rem; }
    #__SCOPE__ .radio-options-wrapper { display: flex; flex-direction: column; gap: 0.75rem; }
    #__SCOPE__ .radio-option, #__SCOPE__ .checkbox-wrapper { display: flex; align-items: center; background-color: var(--input-bg); padding: 0.75rem; border-radius: 0.5rem; border: 1px solid var(--border-color); }
    #__SCOPE__ .radio-option input, #__SCOPE__ .checkbox-wrapper input { width: auto; margin-right: 0.75rem; }
    #__SCOPE__ .radio-option label, #__SCOPE__ .checkbox-wrapper label { margin-bottom: 0; font-weight: 400; font-size: 1rem; }
    #__SCOPE__ input[type="radio"], #__SCOPE__ input[type="checkbox"] { box-shadow: none; width: 1em; height: 1em; accent-color: var(--primary-color); }
    #__SCOPE__ input[type="file"] { background-color: transparent; border: none; padding: 0; }
    #__SCOPE__ select { -webkit-appearance: none; appearance: none; background-image: url("data:image/svg+xml,%3csvg xmlns='http://www.w3.org/2000/svg' fill='none' viewBox='0 0 20 20'%3e%3cpath stroke='%236b7280' stroke-linecap='round' stroke-linejoin='round' stroke-width='1.5' d='M6 8l4 4 4-4'/%3e%3c/svg%3e"); background-position: right 0.5rem center; background-repeat: no-repeat; background-size: 1.5em 1.5em; padding-right: 2.5rem; }

    #__SCOPE__ .consents-container { margin-top: 1.5rem; border-top: 1px solid var(--border-color-light); padding-top: 1.5rem; display: flex; flex-direction: column; gap: 1rem; }
    #__SCOPE__ .consent-group .checkbox-wrapper { padding: 0.5rem 0.75rem; }
    #__SCOPE__ .consent-group label { font-size: 0.8rem; font-weight: normal; color: var(--label-color); }
    #__SCOPE__ .consent-group a { color: var(--primary-color); text-decoration: underline; font-weight: 500; }
    #__SCOPE__ .consent-group a:hover { filter: brightness(0.9); }

    #__SCOPE__ button {
      cursor: pointer;
      padding: 0.75rem 1.5rem;
      border-radius: 0.5rem;
      font-weight: 600;
      font-size: 1rem;
      border: 1px solid transparent;
      transition: all 0.2s ease;
      -webkit-appearance: none;
    }

    #__SCOPE__ .btn-primary { background-color: var(--primary-color); color: var(--button-text-color); }
    #__SCOPE__ .btn-primary:hover { filter: brightness(0.9); }
    #__SCOPE__ .btn-secondary { background-color: var(--border-color-light); color: var(--label-color); }
    #__SCOPE__ .btn-secondary:hover { background-color: var(--border-color); }
    #__SCOPE__ button:disabled { opacity: 0.6; cursor: not-allowed; }

    #__SCOPE__ .success-message { color: var(--success-color); font-weight: bold; text-align: center; }
    #__SCOPE__ .error-message { color: var(--error-color); font-weight: bold; }
    #__SCOPE__ #feedback { margin-top: 1.5rem; text-align: center; min-height: 1.5rem; font-size: 0.875rem; }

    #__SCOPE__ .form-step { display: none; }
    #__SCOPE__ .form-step.active { display: block; animation: fadeIn 0.4s ease-in-out; }

    @keyframes fadeIn { from { opacity: 0; transform: translateY(10px); } to { opacity: 1; transform: translateY(0); } }

    #__SCOPE__ .step-title {
      font-size: 1.25rem;
      font-weight: 600;
      margin-bottom: 1.5rem;
      color: var(--text-color);
      text-align: center;
    }

    #__SCOPE__ .buttons {
      display: flex;
      flex-direction: column-reverse;
      gap: 0.75rem;
      margin-top: 2rem;
      border-top: 1px solid var(--border-color-light);
      padding-top: 1.5rem;
    }
    #__SCOPE__ .buttons button {
      width: 100%;
    }
    #__SCOPE__ .buttons span {
      display: none;
    }
    @media (min-width: 640px) {
      #__SCOPE__ .buttons {
        flex-direction: row;
        justify-content: space-between;
        align-items: center;
      }
      #__SCOPE__ .buttons button {
        width: auto;
      }
      #__SCOPE__ .buttons span {
        display: block;
      }
    }

    #__SCOPE__ .progress-container { position: relative; display: flex; justify-content: space-between; align-items: center; margin-bottom: 2.5rem; }
    #__SCOPE__ .progress-container::before { content: ''; position: absolute; top: 50%; transform: translateY(-50%); height: 4px; width: 100%; background-color: var(--border-color-light); z-index: 1; }
    #__SCOPE__ .progress-bar { position: absolute; top: 50%; transform: translateY(-50%); height: 4px; width: 0%; background-color: var(--primary-color); z-index: 2; transition: width 0.4s ease; }
    #__SCOPE__ .progress-step { width: 30px; height: 30px; background-color: white; border: 3px solid var(--border-color-light); border-radius: 50%; z-index: 3; display: flex; justify-content: center; align-items: center; font-weight: bold; color: var(--label-color); transition: all 0.4s ease; }
    #__SCOPE__ .progress-step.active { border-color: var(--primary-color); background-color: var(--primary-color); color: white; }
"#;

/// The `<style>` body for one compilation, fully scoped under `scope_id`.
pub(crate) fn stylesheet(scope_id: &str, style: &StyleConfig) -> String {
    STYLE_TEMPLATE
        .replace(SCOPE, scope_id)
        .replace("__PRIMARY__", style.primary())
        .replace("__BUTTON_TEXT__", style.button_text())
        .replace("__TEXT__", style.text())
        .replace("__LABEL__", style.label())
        .replace("__FORM_BG__", style.form_background())
}
