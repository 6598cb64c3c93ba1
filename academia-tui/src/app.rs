//! Main loop
//!
//! Each pass:
//!
//! ```text
//! loop {
//!     drain finished requests      → update(App, Api(event))
//!     terminal.draw(view::render)
//!     if app.should_quit { break }
//!     poll_event(100ms)            → handle_event → update
//!     app.take_requests()          → backend.dispatch
//! }
//! ```
//!
//! The loop never blocks on the network: requests run on the backend's
//! runtime and their results are picked up on a later pass.

use std::time::Duration;

use anyhow::Result;

use crate::backend::ApiService;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub fn run(terminal: &mut Term, app: &mut App, backend: &mut ApiService) -> Result<()> {
    loop {
        // 1. results of finished requests
        while let Some(api_event) = backend.try_recv() {
            update::update(app, AppMessage::Api(api_event));
        }

        // 2. render
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 3. quit?
        if app.should_quit {
            break;
        }

        // 4. input
        if let Some(input) = event::poll_event(POLL_INTERVAL)? {
            let msg = event::handle_event(input, app);
            update::update(app, msg);
        }

        // 5. side effects queued by update
        for request in app.take_requests() {
            backend.dispatch(request);
        }
    }

    Ok(())
}
