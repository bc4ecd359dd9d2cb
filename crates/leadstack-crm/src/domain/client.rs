//! Client account aggregate and dashboard users

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use leadstack_common::{Client, EntityId, Service};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Client,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Suspended,
}

/// Dashboard login. Credentials are whatever the remote users table holds;
/// the store is the authority, this is its row shape.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub username: String,
    pub password: String,
    pub role: UserRole,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// A client-role user, created alongside its client account.
    pub fn new_client(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            username: username.into(),
            password: password.into(),
            role: UserRole::Client,
            email: None,
            phone: None,
            status: UserStatus::Active,
            created_at: Utc::now(),
        }
    }

    pub fn is_suspended(&self) -> bool {
        self.status == UserStatus::Suspended
    }
}

/// An agency client and the lead-capture services it offers.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientAccount {
    id: EntityId,
    name: String,
    user_id: EntityId,
    services: Vec<Service>,
    created_at: DateTime<Utc>,
}

impl ClientAccount {
    pub fn create(
        name: impl Into<String>,
        user_id: EntityId,
        services: Vec<Service>,
    ) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            user_id,
            services,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn user_id(&self) -> &EntityId {
        &self.user_id
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replace the service catalogue wholesale, as the dashboard's client
    /// editor does.
    pub fn set_services(&mut self, services: Vec<Service>) {
        self.services = services;
    }

    pub fn add_service(&mut self, service: Service) {
        self.services.push(service);
    }

    /// The shape the form designer consumes.
    pub fn as_client(&self) -> Client {
        Client {
            id: self.id.clone(),
            name: self.name.clone(),
            user_id: self.user_id.clone(),
            services: self.services.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadstack_common::{FieldType, LeadField};

    #[test]
    fn test_new_client_user_is_active_client_role() {
        let user = User::new_client("officina.rossi", "segreta");
        assert_eq!(user.role, UserRole::Client);
        assert!(!user.is_suspended());
    }

    #[test]
    fn test_role_and_status_wire_names_are_lowercase() {
        assert_eq!(
            serde_json::to_string(&UserRole::Admin).unwrap(),
            "\"admin\""
        );
        assert_eq!(
            serde_json::to_string(&UserStatus::Suspended).unwrap(),
            "\"suspended\""
        );
    }

    #[test]
    fn test_account_converts_to_designer_client() {
        let service = Service::new(
            "Tagliando",
            vec![LeadField::new("nome", "Nome", FieldType::Text)],
        );
        let account = ClientAccount::create("Officina Rossi", EntityId::new(), vec![service]);
        let client = account.as_client();
        assert_eq!(client.id, *account.id());
        assert_eq!(client.services.len(), 1);
        assert!(client.service("Tagliando").is_some());
    }

    #[test]
    fn test_service_catalogue_can_be_replaced() {
        let mut account = ClientAccount::create("Officina Rossi", EntityId::new(), vec![]);
        account.add_service(Service::new("Gomme", vec![]));
        assert_eq!(account.services().len(), 1);
        account.set_services(vec![]);
        assert!(account.services().is_empty());
    }
}
