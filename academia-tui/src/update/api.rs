//! Finished background requests

use super::{auth, create_user, users};
use crate::backend::ApiEvent;
use crate::model::{App, Screen};

pub fn update(app: &mut App, event: ApiEvent) {
    match event {
        ApiEvent::Auth(result) => auth::on_result(app, result),
        // results for a session that has since logged out are dropped
        _ if app.screen != Screen::Dashboard => {
            tracing::debug!("Dropping API result received outside the dashboard");
        }
        ApiEvent::UsersLoaded(result) => users::on_loaded(app, result),
        ApiEvent::UserCreated { epoch, .. } | ApiEvent::UserUpdated { epoch, .. }
            if epoch != app.session_epoch =>
        {
            tracing::debug!("Dropping API result from an earlier session");
        }
        ApiEvent::UserCreated { result, .. } => create_user::on_created(app, result),
        ApiEvent::UserUpdated { id, result, .. } => users::on_updated(app, id, result),
    }
}
