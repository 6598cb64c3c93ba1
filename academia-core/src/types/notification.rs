//! User-visible notifications (toast equivalents)

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
}

/// A short message with an optional description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub description: Option<String>,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            title: title.into(),
            description: Some(description.into()),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            title: title.into(),
            description: Some(description.into()),
        }
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            title: title.into(),
            description: None,
        }
    }

    pub fn user_updated() -> Self {
        Self::success(
            "Usuario actualizado",
            "Los cambios se han guardado correctamente.",
        )
    }

    pub fn update_failed() -> Self {
        Self::error(
            "Error al actualizar",
            "No se pudo actualizar el usuario. Intente nuevamente.",
        )
    }

    pub fn user_created() -> Self {
        Self::success("Usuario creado correctamente", "")
    }

    /// Single-line rendering for a status bar
    pub fn summary(&self) -> String {
        match self.description.as_deref() {
            Some(desc) if !desc.is_empty() => format!("{}: {desc}", self.title),
            _ => self.title.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_skips_empty_description() {
        assert_eq!(
            Notification::user_created().summary(),
            "Usuario creado correctamente"
        );
        assert_eq!(
            Notification::update_failed().summary(),
            "Error al actualizar: No se pudo actualizar el usuario. Intente nuevamente."
        );
    }
}
