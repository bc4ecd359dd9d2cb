//! Embedded submission script emission
//!
//! The generated document carries its own module script: a tiny state
//! machine over steps 1..N with next/prev transitions gated by per-step
//! validation, and a terminal submit that persists the lead directly to the
//! remote store. The webhook and redirect segments are spliced in only when
//! configured, so an unconfigured webhook leaves no webhook code path in the
//! artifact at all.

use crate::config::FormConfig;

const SCRIPT_TEMPLATE: &str = r#"
  import { createClient } from 'https://cdn.jsdelivr.net/npm/@supabase/supabase-js/+esm';

  const SUPABASE_URL = '__STORE_URL__';
  const SUPABASE_ANON_KEY = '__STORE_KEY__';
  const CLIENT_ID = '__CLIENT_ID__';
  const SERVICE_NAME = '__SERVICE_NAME__';

  const supabase = createClient(SUPABASE_URL, SUPABASE_ANON_KEY);

  const formWrapper = document.getElementById('__SCOPE__');
  const form = formWrapper.querySelector('#leadForm');
  const feedback = formWrapper.querySelector('#feedback');
  const steps = formWrapper.querySelectorAll('.form-step');
  const submitButton = form.querySelector('button[type="submit"]');
  let currentStep = 1;

  function updateProgressBar() {
    const progressSteps = formWrapper.querySelectorAll('.progress-step');
    const progressBar = formWrapper.querySelector('#progressBar');
    if (!progressSteps.length || !progressBar) return;

    progressSteps.forEach((stepEl, index) => {
      if (index < currentStep) {
        stepEl.classList.add('active');
      } else {
        stepEl.classList.remove('active');
      }
    });

    const activeSteps = formWrapper.querySelectorAll('.progress-step.active');
    const width = (activeSteps.length - 1) / (progressSteps.length - 1) * 100;
    progressBar.style.width = `${width}%`;
  }

  function showStep(stepIndex) {
    if (steps.length === 0) return;
    const stepToShow = form.querySelector(`.form-step[data-step="${stepIndex}"]`);
    if (stepToShow) {
      steps.forEach(step => step.classList.remove('active'));
      stepToShow.classList.add('active');
      currentStep = stepIndex;
      updateProgressBar();
    }
  }

  function validateStep(stepIndex) {
    const currentStepElement = form.querySelector(`.form-step[data-step="${stepIndex}"]`);
    const inputs = currentStepElement.querySelectorAll('input[required], select[required], textarea[required]');
    let isValid = true;
    inputs.forEach(input => {
      if (input.type === 'radio' || input.type === 'checkbox') {
        if (input.required) {
          const name = input.name;
          if (!form.querySelector(`input[name="${name}"]:checked`)) {
            isValid = false;
          }
        }
      } else if (!input.value.trim()) {
        isValid = false;
        input.style.borderColor = 'var(--error-color)';
      } else {
        input.style.borderColor = 'var(--border-color)';
      }
    });
    if (!isValid) feedback.textContent = 'Per favore, compila tutti i campi obbligatori.';
    else feedback.textContent = '';
    return isValid;
  }

  function validateAll() {
    const inputs = form.querySelectorAll('input[required], select[required], textarea[required]');
    let isValid = true;
    inputs.forEach(input => {
      if (input.type === 'radio') {
        const name = input.name;
        if (!form.querySelector(`input[name="${name}"]:checked`)) {
          isValid = false;
        }
      } else if (input.type === 'checkbox') {
        if (!input.checked) {
          isValid = false;
          const wrapper = input.closest('.checkbox-wrapper, .consent-group');
          if (wrapper) wrapper.style.borderColor = 'var(--error-color)';
        } else {
          const wrapper = input.closest('.checkbox-wrapper, .consent-group');
          if (wrapper) wrapper.style.borderColor = 'var(--border-color)';
        }
      } else if (!input.value.trim()) {
        isValid = false;
        input.style.borderColor = 'var(--error-color)';
      } else {
        input.style.borderColor = 'var(--border-color)';
      }
    });
    if (!isValid) feedback.textContent = 'Per favore, compila tutti i campi obbligatori.';
    else feedback.textContent = '';
    return isValid;
  }

  form.addEventListener('click', e => {
    if (e.target.matches('.next')) {
      if (validateStep(currentStep) && currentStep < steps.length) {
        showStep(currentStep + 1);
      }
    } else if (e.target.matches('.prev')) {
      if (currentStep > 1) {
        showStep(currentStep - 1);
      }
    }
  });

  form.addEventListener('submit', async (e) => {
    e.preventDefault();
    if (steps.length > 0) {
      if (!validateStep(currentStep)) return;
    } else {
      if (!validateAll()) return;
    }

    feedback.textContent = '';
    feedback.className = '';
    if (submitButton) {
      submitButton.disabled = true;
      submitButton.textContent = 'Invio...';
    }

    const formData = new FormData(form);
    const dataJson = {};
    const consentKeys = ['privacy_policy_consent', 'terms_consent'];
    formData.forEach((value, key) => {
      if (!consentKeys.includes(key)) {
        dataJson[key] = value;
      }
    });

    try {
      let ip_address = 'N/A';
      try {
        const ipResponse = await fetch('https://api.ipify.org?format=json');
        if (ipResponse.ok) {
          const ipData = await ipResponse.json();
          ip_address = ipData.ip;
        }
      } catch (ipError) {
        console.error('Could not fetch IP address:', ipError);
      }

      dataJson.ip_address = ip_address;
      dataJson.user_agent = navigator.userAgent;

      const submissionTime = new Date().toISOString();

      const { error } = await supabase.from('leads').insert([{
        client_id: CLIENT_ID,
        data: dataJson,
        service: SERVICE_NAME,
        status: 'Nuovo',
        created_at: submissionTime
      }]);

      if (error) {
        throw new Error(error.message);
      }
__WEBHOOK_SECTION____FINISH_SECTION__
    } catch (err) {
      console.error(err);
      feedback.textContent = '❌ Errore durante l’invio. Riprova.';
      feedback.className = 'error-message';
      if (submitButton) {
        submitButton.disabled = false;
        submitButton.textContent = '__SUBMIT_LABEL__';
      }
    }
  });

  if (steps.length > 0) showStep(1);
"#;

const WEBHOOK_SECTION: &str = r#"
      try {
        await fetch('__WEBHOOK_URL__', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify({ ...dataJson, client_id: CLIENT_ID, service: SERVICE_NAME, created_at: submissionTime })
        });
      } catch (webhookError) {
        console.error('Webhook request failed:', webhookError);
      }
"#;

const REDIRECT_SECTION: &str = r#"
      window.location.href = '__THANK_YOU_URL__';
"#;

const SUCCESS_SECTION: &str = r#"
      formWrapper.innerHTML = '<div class="success-message" style="text-align: center; padding: 2rem;"><h2>✅ Grazie!</h2><p>I tuoi dati sono stati inviati con successo.</p></div>';
"#;

/// The module-script body for one compilation.
pub(crate) fn module_script(
    scope_id: &str,
    client_id: &str,
    service_name: &str,
    config: &FormConfig,
) -> String {
    let webhook = if config.webhook_url.is_empty() {
        String::new()
    } else {
        WEBHOOK_SECTION.replace("__WEBHOOK_URL__", &config.webhook_url)
    };
    let finish = if config.thank_you_url.is_empty() {
        SUCCESS_SECTION.to_string()
    } else {
        REDIRECT_SECTION.replace("__THANK_YOU_URL__", &config.thank_you_url)
    };

    SCRIPT_TEMPLATE
        .replace("__SCOPE__", scope_id)
        .replace("__STORE_URL__", &config.store.url)
        .replace("__STORE_KEY__", &config.store.anon_key)
        .replace("__CLIENT_ID__", client_id)
        .replace("__SERVICE_NAME__", service_name)
        .replace("__WEBHOOK_SECTION__", &webhook)
        .replace("__FINISH_SECTION__", &finish)
        .replace("__SUBMIT_LABEL__", config.style.submit_label())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(config: &FormConfig) -> String {
        module_script("lf-wrapper-1", "client-1", "Tagliando", config)
    }

    #[test]
    fn test_compiled_constants_are_substituted() {
        let mut config = FormConfig::default();
        config.store.url = "https://project.supabase.co".into();
        config.store.anon_key = "anon-key".into();
        let js = script(&config);
        assert!(js.contains("const SUPABASE_URL = 'https://project.supabase.co';"));
        assert!(js.contains("const CLIENT_ID = 'client-1';"));
        assert!(js.contains("const SERVICE_NAME = 'Tagliando';"));
        assert!(!js.contains("__SCOPE__"));
    }

    #[test]
    fn test_empty_webhook_url_emits_no_webhook_code() {
        let js = script(&FormConfig::default());
        assert!(!js.to_lowercase().contains("webhook"));
    }

    #[test]
    fn test_configured_webhook_posts_after_persistence() {
        let mut config = FormConfig::default();
        config.webhook_url = "https://hooks.example.com/lead".into();
        let js = script(&config);
        let insert_at = js.find("supabase.from('leads').insert").unwrap();
        let webhook_at = js.find("https://hooks.example.com/lead").unwrap();
        assert!(insert_at < webhook_at);
        assert!(js.contains("console.error('Webhook request failed:"));
    }

    #[test]
    fn test_no_thank_you_url_replaces_form_with_success_message() {
        let js = script(&FormConfig::default());
        assert!(js.contains("formWrapper.innerHTML"));
        assert!(!js.contains("window.location.href"));
    }

    #[test]
    fn test_thank_you_url_redirects_instead_of_inline_message() {
        let mut config = FormConfig::default();
        config.thank_you_url = "https://example.com/grazie".into();
        let js = script(&config);
        assert!(js.contains("window.location.href = 'https://example.com/grazie';"));
        assert!(!js.contains("formWrapper.innerHTML"));
    }

    #[test]
    fn test_radio_gate_checks_the_whole_group() {
        let js = script(&FormConfig::default());
        assert!(js.contains(r#"input[name="${name}"]:checked"#));
    }

    #[test]
    fn test_failed_persistence_reenables_submit_with_label() {
        let mut config = FormConfig::default();
        config.style.submit_button_text = "Prenota ora".into();
        let js = script(&config);
        assert!(js.contains("submitButton.disabled = false;"));
        assert!(js.contains("submitButton.textContent = 'Prenota ora';"));
    }
}
