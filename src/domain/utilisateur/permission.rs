//! Role-based permissions

use super::Role;

/// Capability checked at the start of each request handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Read entreprises, stands, intervenants, salles, conferences,
    /// evenements, partenaires and contrats
    ViewCatalog,
    /// Create, update and delete catalog resources
    ManageCatalog,
    ViewTasks,
    /// Edit an existing task
    UpdateTasks,
    /// Create and delete tasks
    ManageTasks,
    ManageUsers,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ViewCatalog => "view_catalog",
            Self::ManageCatalog => "manage_catalog",
            Self::ViewTasks => "view_tasks",
            Self::UpdateTasks => "update_tasks",
            Self::ManageTasks => "manage_tasks",
            Self::ManageUsers => "manage_users",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Role {
    pub fn permissions(&self) -> &'static [Permission] {
        use Permission::*;
        match self {
            Role::Admin => &[
                ViewCatalog,
                ManageCatalog,
                ViewTasks,
                UpdateTasks,
                ManageTasks,
                ManageUsers,
            ],
            Role::Equipier => &[ViewCatalog, ViewTasks, UpdateTasks],
        }
    }

    pub fn can(&self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }
}
