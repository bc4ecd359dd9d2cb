//! Use-case services

use std::sync::Arc;

use tracing::{info, warn};

use leadstack_common::EntityId;

use crate::application::dto::{
    AddLeadCommand, AddSpendCommand, CreateClientCommand, SaveFormCommand, UpdateClientCommand,
};
use crate::application::UseCaseError;
use crate::domain::{AdSpend, ClientAccount, Lead, SavedForm, User, UserStatus};
use crate::ports::{
    ClientRepository, FormRepository, LeadRepository, SpendRepository, UserRepository,
};

/// Client account management, including the login row that backs each
/// client.
pub struct ClientService {
    clients: Arc<dyn ClientRepository>,
    users: Arc<dyn UserRepository>,
    leads: Arc<dyn LeadRepository>,
    spends: Arc<dyn SpendRepository>,
}

impl ClientService {
    pub fn new(
        clients: Arc<dyn ClientRepository>,
        users: Arc<dyn UserRepository>,
        leads: Arc<dyn LeadRepository>,
        spends: Arc<dyn SpendRepository>,
    ) -> Self {
        Self {
            clients,
            users,
            leads,
            spends,
        }
    }

    /// Create the user row first, then the client row; a failed client
    /// insert rolls the user back so no orphan login remains.
    pub async fn create_client(
        &self,
        command: CreateClientCommand,
    ) -> Result<ClientAccount, UseCaseError> {
        if command.password.trim().is_empty() {
            return Err(UseCaseError::Validation(
                "password must not be empty".into(),
            ));
        }
        if self
            .users
            .find_by_username(&command.username)
            .await?
            .is_some()
        {
            return Err(UseCaseError::Validation(format!(
                "username already taken: {}",
                command.username
            )));
        }

        let user = User::new_client(command.username, command.password);
        self.users.save(&user).await?;

        let account = ClientAccount::create(command.name, user.id.clone(), command.services);
        if let Err(err) = self.clients.save(&account).await {
            warn!(user = %user.id, "client insert failed, rolling back user row");
            let _ = self.users.delete(&user.id).await;
            return Err(err.into());
        }

        info!(client = %account.id(), "client account created");
        Ok(account)
    }

    pub async fn update_client(
        &self,
        command: UpdateClientCommand,
    ) -> Result<ClientAccount, UseCaseError> {
        let mut account = self
            .clients
            .find_by_id(&command.client_id)
            .await?
            .ok_or_else(|| UseCaseError::NotFound("client not found".into()))?;

        if let Some(name) = command.name {
            account.rename(name);
        }
        if let Some(services) = command.services {
            account.set_services(services);
        }
        self.clients.save(&account).await?;
        Ok(account)
    }

    /// Remove a client and everything hanging off it: leads, spends, and
    /// finally the user row.
    pub async fn delete_client(&self, client_id: &EntityId) -> Result<(), UseCaseError> {
        let account = self
            .clients
            .find_by_id(client_id)
            .await?
            .ok_or_else(|| UseCaseError::NotFound("client not found".into()))?;

        self.leads.delete_by_client(client_id).await?;
        self.spends.delete_by_client(client_id).await?;
        self.clients.delete(client_id).await?;
        self.users.delete(account.user_id()).await?;

        info!(client = %client_id, "client account deleted");
        Ok(())
    }

    pub async fn get_client(
        &self,
        client_id: &EntityId,
    ) -> Result<Option<ClientAccount>, UseCaseError> {
        Ok(self.clients.find_by_id(client_id).await?)
    }

    pub async fn list_clients(&self) -> Result<Vec<ClientAccount>, UseCaseError> {
        Ok(self.clients.list().await?)
    }

    /// Credential check against the users table. The returned row has its
    /// password blanked, like the dashboard's session object.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, UseCaseError> {
        let Some(mut user) = self.users.find_by_username(username).await? else {
            return Err(UseCaseError::InvalidCredentials);
        };
        if user.password != password {
            return Err(UseCaseError::InvalidCredentials);
        }
        if user.is_suspended() {
            return Err(UseCaseError::AccountSuspended);
        }
        user.password.clear();
        Ok(user)
    }

    pub async fn set_user_status(
        &self,
        user_id: &EntityId,
        status: UserStatus,
    ) -> Result<User, UseCaseError> {
        let mut user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| UseCaseError::NotFound("user not found".into()))?;
        user.status = status;
        self.users.save(&user).await?;
        info!(user = %user_id, ?status, "user status changed");
        Ok(user)
    }
}

/// Lead pipeline operations.
pub struct LeadService {
    leads: Arc<dyn LeadRepository>,
}

impl LeadService {
    pub fn new(leads: Arc<dyn LeadRepository>) -> Self {
        Self { leads }
    }

    pub async fn add_lead(&self, command: AddLeadCommand) -> Result<Lead, UseCaseError> {
        let mut lead = Lead::create(command.client_id, command.data, command.service);
        if let Some(status) = command.status {
            lead.set_status(status);
        }
        lead.set_value(command.value);
        self.leads.save(&lead).await?;
        info!(lead = %lead.id(), client = %lead.client_id(), "lead recorded");
        Ok(lead)
    }

    pub async fn update_status(
        &self,
        lead_id: &EntityId,
        status: crate::domain::LeadStatus,
    ) -> Result<Lead, UseCaseError> {
        let mut lead = self.require(lead_id).await?;
        lead.set_status(status);
        self.leads.save(&lead).await?;
        Ok(lead)
    }

    pub async fn set_value(
        &self,
        lead_id: &EntityId,
        value: Option<f64>,
    ) -> Result<Lead, UseCaseError> {
        let mut lead = self.require(lead_id).await?;
        lead.set_value(value);
        self.leads.save(&lead).await?;
        Ok(lead)
    }

    pub async fn add_note(
        &self,
        lead_id: &EntityId,
        content: &str,
    ) -> Result<Lead, UseCaseError> {
        let mut lead = self.require(lead_id).await?;
        lead.add_note(content);
        self.leads.save(&lead).await?;
        Ok(lead)
    }

    pub async fn delete_lead(&self, lead_id: &EntityId) -> Result<(), UseCaseError> {
        self.leads.delete(lead_id).await?;
        Ok(())
    }

    pub async fn delete_leads(&self, lead_ids: &[EntityId]) -> Result<(), UseCaseError> {
        self.leads.delete_many(lead_ids).await?;
        Ok(())
    }

    pub async fn leads_for_client(
        &self,
        client_id: &EntityId,
    ) -> Result<Vec<Lead>, UseCaseError> {
        Ok(self.leads.find_by_client(client_id).await?)
    }

    async fn require(&self, lead_id: &EntityId) -> Result<Lead, UseCaseError> {
        self.leads
            .find_by_id(lead_id)
            .await?
            .ok_or_else(|| UseCaseError::NotFound("lead not found".into()))
    }
}

/// Advertising spend bookkeeping.
pub struct SpendService {
    spends: Arc<dyn SpendRepository>,
}

impl SpendService {
    pub fn new(spends: Arc<dyn SpendRepository>) -> Self {
        Self { spends }
    }

    pub async fn add_spend(&self, command: AddSpendCommand) -> Result<AdSpend, UseCaseError> {
        if command.end_date < command.start_date {
            return Err(UseCaseError::Validation(
                "end date before start date".into(),
            ));
        }
        let spend = AdSpend::new(
            command.client_id,
            command.service,
            command.platform,
            command.amount,
            command.start_date,
            command.end_date,
        );
        self.spends.save(&spend).await?;
        Ok(spend)
    }

    pub async fn update_spend(&self, spend: &AdSpend) -> Result<(), UseCaseError> {
        if spend.end_date < spend.start_date {
            return Err(UseCaseError::Validation(
                "end date before start date".into(),
            ));
        }
        self.spends.save(spend).await?;
        Ok(())
    }

    pub async fn delete_spend(&self, spend_id: &EntityId) -> Result<(), UseCaseError> {
        self.spends.delete(spend_id).await?;
        Ok(())
    }

    pub async fn spends_for_client(
        &self,
        client_id: &EntityId,
    ) -> Result<Vec<AdSpend>, UseCaseError> {
        Ok(self.spends.find_by_client(client_id).await?)
    }
}

/// Saved form-generator configurations.
pub struct FormService {
    forms: Arc<dyn FormRepository>,
}

impl FormService {
    pub fn new(forms: Arc<dyn FormRepository>) -> Self {
        Self { forms }
    }

    pub async fn save_form(&self, command: SaveFormCommand) -> Result<SavedForm, UseCaseError> {
        let form = SavedForm::new(
            command.name,
            command.client_id,
            command.service_name,
            command.config,
        );
        self.forms.save(&form).await?;
        info!(form = %form.id, "form configuration saved");
        Ok(form)
    }

    pub async fn get_form(&self, form_id: &EntityId) -> Result<Option<SavedForm>, UseCaseError> {
        Ok(self.forms.find_by_id(form_id).await?)
    }

    pub async fn list_forms(&self) -> Result<Vec<SavedForm>, UseCaseError> {
        Ok(self.forms.list().await?)
    }

    pub async fn forms_for_client(
        &self,
        client_id: &EntityId,
    ) -> Result<Vec<SavedForm>, UseCaseError> {
        Ok(self.forms.find_by_client(client_id).await?)
    }

    pub async fn delete_form(&self, form_id: &EntityId) -> Result<(), UseCaseError> {
        self.forms.delete(form_id).await?;
        Ok(())
    }
}
