//! Role definitions and the role-id ↔ role-name table
//!
//! This is the single table used by every form: the register view and the
//! admin create form submit `roleId`, the admin edit form submits `roles: [name]`.

use crate::error::{CoreError, CoreResult};

/// Platform role
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Role {
    #[default]
    Estudiante,
    Administrador,
    Docente,
}

struct RoleEntry {
    role: Role,
    id: i64,
    /// Form keys accepted for this role (the first one is canonical)
    keys: &'static [&'static str],
    /// Name sent in the `roles` array of an update
    wire_name: &'static str,
    label: &'static str,
}

const ROLE_TABLE: &[RoleEntry] = &[
    RoleEntry {
        role: Role::Estudiante,
        id: 1,
        keys: &["estudiante"],
        wire_name: "estudiante",
        label: "Estudiante",
    },
    RoleEntry {
        role: Role::Administrador,
        id: 2,
        keys: &["admin", "administrador"],
        wire_name: "administrador",
        label: "Administrador",
    },
    RoleEntry {
        role: Role::Docente,
        id: 3,
        keys: &["docente"],
        wire_name: "docente",
        label: "Docente",
    },
];

impl Role {
    /// All roles in id order
    pub fn all() -> &'static [Role] {
        &[Role::Estudiante, Role::Administrador, Role::Docente]
    }

    fn entry(self) -> &'static RoleEntry {
        // ROLE_TABLE has one entry per variant
        match self {
            Role::Estudiante => &ROLE_TABLE[0],
            Role::Administrador => &ROLE_TABLE[1],
            Role::Docente => &ROLE_TABLE[2],
        }
    }

    pub fn id(self) -> i64 {
        self.entry().id
    }

    /// Canonical form key (`estudiante`, `admin`, `docente`)
    pub fn key(self) -> &'static str {
        self.entry().keys[0]
    }

    pub fn wire_name(self) -> &'static str {
        self.entry().wire_name
    }

    pub fn label(self) -> &'static str {
        self.entry().label
    }

    pub fn from_id(id: i64) -> CoreResult<Role> {
        ROLE_TABLE
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.role)
            .ok_or(CoreError::UnknownRoleId(id))
    }

    /// Resolve a form key or wire name
    pub fn from_key(key: &str) -> CoreResult<Role> {
        let key = key.trim();
        ROLE_TABLE
            .iter()
            .find(|e| e.keys.contains(&key) || e.wire_name == key)
            .map(|e| e.role)
            .ok_or_else(|| CoreError::UnknownRoleName(key.to_string()))
    }

    #[must_use]
    pub fn next(self) -> Role {
        match self {
            Role::Estudiante => Role::Administrador,
            Role::Administrador => Role::Docente,
            Role::Docente => Role::Estudiante,
        }
    }

    #[must_use]
    pub fn prev(self) -> Role {
        match self {
            Role::Estudiante => Role::Docente,
            Role::Administrador => Role::Estudiante,
            Role::Docente => Role::Administrador,
        }
    }
}

/// Lookup helpers over the role table, keyed the way the backend expects
pub struct RoleMap;

impl RoleMap {
    /// `roleId` for a form key (`estudiante` → 1, `admin` → 2, `docente` → 3)
    pub fn id_for(key: &str) -> CoreResult<i64> {
        Role::from_key(key).map(Role::id)
    }

    /// `roles` array for a numeric role id (2 → `["administrador"]`)
    pub fn roles_for(id: i64) -> CoreResult<Vec<String>> {
        Role::from_id(id).map(|role| vec![role.wire_name().to_string()])
    }

    /// Display label for a role id, falling back to the raw number
    pub fn label_for(id: i64) -> String {
        Role::from_id(id).map_or_else(|_| id.to_string(), |role| role.label().to_string())
    }
}
