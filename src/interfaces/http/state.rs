//! State shared by the resource handlers

use std::sync::Arc;

use crate::application::AuthService;
use crate::domain::RepositoryProvider;

#[derive(Clone)]
pub struct ApiState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub auth: Arc<AuthService>,
}

impl ApiState {
    pub fn new(repos: Arc<dyn RepositoryProvider>, auth: Arc<AuthService>) -> Self {
        Self { repos, auth }
    }
}
