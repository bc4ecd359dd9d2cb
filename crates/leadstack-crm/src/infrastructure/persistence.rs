//! In-memory repository implementations for testing

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use leadstack_common::EntityId;

use crate::domain::{AdSpend, ClientAccount, Lead, SavedForm, User};
use crate::ports::{
    ClientRepository, FormRepository, LeadRepository, RepositoryError, SpendRepository,
    UserRepository,
};

/// In-memory client repository (for testing)
#[derive(Default)]
pub struct InMemoryClientRepository {
    clients: RwLock<HashMap<String, ClientAccount>>,
}

impl InMemoryClientRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<ClientAccount>, RepositoryError> {
        let clients = self.clients.read().unwrap();
        Ok(clients.get(id.as_str()).cloned())
    }

    async fn find_by_user(
        &self,
        user_id: &EntityId,
    ) -> Result<Option<ClientAccount>, RepositoryError> {
        let clients = self.clients.read().unwrap();
        Ok(clients.values().find(|c| c.user_id() == user_id).cloned())
    }

    async fn list(&self) -> Result<Vec<ClientAccount>, RepositoryError> {
        let clients = self.clients.read().unwrap();
        Ok(clients.values().cloned().collect())
    }

    async fn save(&self, client: &ClientAccount) -> Result<(), RepositoryError> {
        let mut clients = self.clients.write().unwrap();
        clients.insert(client.id().to_string(), client.clone());
        Ok(())
    }

    async fn delete(&self, id: &EntityId) -> Result<(), RepositoryError> {
        let mut clients = self.clients.write().unwrap();
        clients.remove(id.as_str());
        Ok(())
    }
}

/// In-memory user repository (for testing)
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<User>, RepositoryError> {
        let users = self.users.read().unwrap();
        Ok(users.get(id.as_str()).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let users = self.users.read().unwrap();
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn save(&self, user: &User) -> Result<(), RepositoryError> {
        let mut users = self.users.write().unwrap();
        users.insert(user.id.to_string(), user.clone());
        Ok(())
    }

    async fn delete(&self, id: &EntityId) -> Result<(), RepositoryError> {
        let mut users = self.users.write().unwrap();
        users.remove(id.as_str());
        Ok(())
    }
}

/// In-memory lead repository (for testing)
#[derive(Default)]
pub struct InMemoryLeadRepository {
    leads: RwLock<HashMap<String, Lead>>,
}

impl InMemoryLeadRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LeadRepository for InMemoryLeadRepository {
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Lead>, RepositoryError> {
        let leads = self.leads.read().unwrap();
        Ok(leads.get(id.as_str()).cloned())
    }

    async fn find_by_client(&self, client_id: &EntityId) -> Result<Vec<Lead>, RepositoryError> {
        let leads = self.leads.read().unwrap();
        Ok(leads
            .values()
            .filter(|l| l.client_id() == client_id)
            .cloned()
            .collect())
    }

    async fn save(&self, lead: &Lead) -> Result<(), RepositoryError> {
        let mut leads = self.leads.write().unwrap();
        leads.insert(lead.id().to_string(), lead.clone());
        Ok(())
    }

    async fn delete(&self, id: &EntityId) -> Result<(), RepositoryError> {
        let mut leads = self.leads.write().unwrap();
        leads.remove(id.as_str());
        Ok(())
    }

    async fn delete_many(&self, ids: &[EntityId]) -> Result<(), RepositoryError> {
        let mut leads = self.leads.write().unwrap();
        for id in ids {
            leads.remove(id.as_str());
        }
        Ok(())
    }

    async fn delete_by_client(&self, client_id: &EntityId) -> Result<(), RepositoryError> {
        let mut leads = self.leads.write().unwrap();
        leads.retain(|_, l| l.client_id() != client_id);
        Ok(())
    }
}

/// In-memory spend repository (for testing)
#[derive(Default)]
pub struct InMemorySpendRepository {
    spends: RwLock<HashMap<String, AdSpend>>,
}

impl InMemorySpendRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SpendRepository for InMemorySpendRepository {
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<AdSpend>, RepositoryError> {
        let spends = self.spends.read().unwrap();
        Ok(spends.get(id.as_str()).cloned())
    }

    async fn find_by_client(&self, client_id: &EntityId) -> Result<Vec<AdSpend>, RepositoryError> {
        let spends = self.spends.read().unwrap();
        Ok(spends
            .values()
            .filter(|s| &s.client_id == client_id)
            .cloned()
            .collect())
    }

    async fn save(&self, spend: &AdSpend) -> Result<(), RepositoryError> {
        let mut spends = self.spends.write().unwrap();
        spends.insert(spend.id.to_string(), spend.clone());
        Ok(())
    }

    async fn delete(&self, id: &EntityId) -> Result<(), RepositoryError> {
        let mut spends = self.spends.write().unwrap();
        spends.remove(id.as_str());
        Ok(())
    }

    async fn delete_by_client(&self, client_id: &EntityId) -> Result<(), RepositoryError> {
        let mut spends = self.spends.write().unwrap();
        spends.retain(|_, s| &s.client_id != client_id);
        Ok(())
    }
}

/// In-memory saved-form repository (for testing)
#[derive(Default)]
pub struct InMemoryFormRepository {
    forms: RwLock<HashMap<String, SavedForm>>,
}

impl InMemoryFormRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FormRepository for InMemoryFormRepository {
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<SavedForm>, RepositoryError> {
        let forms = self.forms.read().unwrap();
        Ok(forms.get(id.as_str()).cloned())
    }

    async fn find_by_client(
        &self,
        client_id: &EntityId,
    ) -> Result<Vec<SavedForm>, RepositoryError> {
        let forms = self.forms.read().unwrap();
        Ok(forms
            .values()
            .filter(|f| &f.client_id == client_id)
            .cloned()
            .collect())
    }

    async fn list(&self) -> Result<Vec<SavedForm>, RepositoryError> {
        let forms = self.forms.read().unwrap();
        Ok(forms.values().cloned().collect())
    }

    async fn save(&self, form: &SavedForm) -> Result<(), RepositoryError> {
        let mut forms = self.forms.write().unwrap();
        forms.insert(form.id.to_string(), form.clone());
        Ok(())
    }

    async fn delete(&self, id: &EntityId) -> Result<(), RepositoryError> {
        let mut forms = self.forms.write().unwrap();
        forms.remove(id.as_str());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_lead_repository_save_and_find() {
        let repo = InMemoryLeadRepository::new();
        let lead = Lead::create(
            EntityId::from_string("client-1"),
            HashMap::new(),
            "Tagliando",
        );

        repo.save(&lead).await.unwrap();

        let found = repo.find_by_id(lead.id()).await.unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().service(), "Tagliando");
    }

    #[tokio::test]
    async fn test_lead_repository_filters_by_client() {
        let repo = InMemoryLeadRepository::new();
        let mine = Lead::create(EntityId::from_string("client-1"), HashMap::new(), "A");
        let other = Lead::create(EntityId::from_string("client-2"), HashMap::new(), "B");
        repo.save(&mine).await.unwrap();
        repo.save(&other).await.unwrap();

        let found = repo
            .find_by_client(&EntityId::from_string("client-1"))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].service(), "A");
    }

    #[tokio::test]
    async fn test_lead_repository_delete_many() {
        let repo = InMemoryLeadRepository::new();
        let a = Lead::create(EntityId::from_string("client-1"), HashMap::new(), "A");
        let b = Lead::create(EntityId::from_string("client-1"), HashMap::new(), "B");
        repo.save(&a).await.unwrap();
        repo.save(&b).await.unwrap();

        repo.delete_many(&[a.id().clone(), b.id().clone()])
            .await
            .unwrap();
        assert!(repo
            .find_by_client(&EntityId::from_string("client-1"))
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_user_repository_finds_by_username() {
        let repo = InMemoryUserRepository::new();
        let user = User::new_client("rossi", "segreta");
        repo.save(&user).await.unwrap();

        let found = repo.find_by_username("rossi").await.unwrap();
        assert!(found.is_some());
        assert!(repo.find_by_username("bianchi").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_client_repository_finds_by_user() {
        let repo = InMemoryClientRepository::new();
        let account = ClientAccount::create("Officina Rossi", EntityId::from_string("user-1"), vec![]);
        repo.save(&account).await.unwrap();

        let found = repo
            .find_by_user(&EntityId::from_string("user-1"))
            .await
            .unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().name(), "Officina Rossi");
    }
}
