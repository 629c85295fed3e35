//! Render loop runtime.
//!
//! The Runtime is the single consumer of the dispatcher. It waits for an
//! event, hands it to [`App`], and executes the resulting actions on the
//! [`Driver`]. Events that are already buffered are handled back to back
//! before drawing, so a burst of messages costs one redraw instead of one per
//! line. Each event still reaches the App individually and in order.

use crate::{App, AppAction, Driver, EventInbox};

/// Upper bound on events handled between two redraws.
const MAX_BATCH: usize = 256;

/// Single-consumer loop over the dispatcher inbox.
pub struct Runtime<D: Driver> {
    driver: D,
    app: App,
    inbox: EventInbox,
}

impl<D: Driver> Runtime<D> {
    /// Create a runtime draining `inbox` into a fresh [`App`].
    pub fn new(driver: D, inbox: EventInbox) -> Self {
        Self { driver, app: App::new(), inbox }
    }

    /// Run until a quit is requested or every producer has hung up.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver fails to draw.
    pub async fn run(&mut self) -> Result<(), D::Error> {
        self.driver.render(&self.app)?;

        let result = self.event_loop().await;
        self.inbox.close();
        self.driver.stop();
        result
    }

    async fn event_loop(&mut self) -> Result<(), D::Error> {
        while let Some(event) = self.inbox.next().await {
            let mut dirty = false;
            let mut next = Some(event);
            let mut handled = 0;

            while let Some(event) = next.take() {
                for action in self.app.handle(event) {
                    match action {
                        AppAction::Render => dirty = true,
                        AppAction::Quit => {
                            tracing::debug!("quit requested");
                            return Ok(());
                        },
                    }
                }

                handled += 1;
                if handled < MAX_BATCH {
                    next = self.inbox.try_next();
                }
            }

            if dirty {
                self.driver.render(&self.app)?;
            }
        }

        tracing::debug!("all event producers closed");
        Ok(())
    }

    /// Get a reference to the App.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a reference to the driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }
}
