use std::fmt;
use std::sync::Arc;

use log::debug;
use log::warn;

use crate::error::ActionError;

/// Callback invoked with the primary-key value of the acted-on row.
pub type ActionCallback = Arc<dyn Fn(i64) -> Result<(), ActionError> + Send + Sync>;

/// A row-level action: a labelled control wired to a server-side signal.
#[derive(Clone)]
pub struct Action {
    label: String,
    signal: String,
    css_class: Option<String>,
    callbacks: Vec<ActionCallback>,
}

impl Action {
    pub fn new(label: impl Into<String>, signal: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            signal: signal.into(),
            css_class: None,
            callbacks: Vec::new(),
        }
    }

    /// Sets the CSS class the template puts on the action's control.
    pub fn with_css_class(mut self, class: impl Into<String>) -> Self {
        self.css_class = Some(class.into());
        self
    }

    /// Appends a callback; callbacks run in registration order.
    pub fn on_execute(
        mut self,
        callback: impl Fn(i64) -> Result<(), ActionError> + Send + Sync + 'static,
    ) -> Self {
        self.callbacks.push(Arc::new(callback));
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn signal(&self) -> &str {
        &self.signal
    }

    pub fn css_class(&self) -> Option<&str> {
        self.css_class.as_deref()
    }

    /// Runs every callback with `row_id`. A failing callback is logged and
    /// the remaining callbacks still run.
    fn execute(&self, row_id: i64) {
        for callback in &self.callbacks {
            if let Err(err) = callback(row_id) {
                warn!(
                    "Action '{}' callback failed for row {row_id}: {err}",
                    self.signal
                );
            }
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("label", &self.label)
            .field("signal", &self.signal)
            .field("css_class", &self.css_class)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

/// Ordered collection of row actions.
#[derive(Debug, Clone, Default)]
pub struct ActionSet {
    actions: Vec<Action>,
}

impl ActionSet {
    pub fn add(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Dispatches `signal` for `row_id`, returning whether an action
    /// matched.
    ///
    /// Non-positive row ids are refused before any lookup. Signal
    /// uniqueness is not enforced at registration; the first match wins.
    pub fn dispatch(&self, signal: &str, row_id: i64) -> bool {
        if row_id <= 0 {
            debug!("Ignoring action '{signal}' with non-positive row id {row_id}");
            return false;
        }
        let Some(action) = self.actions.iter().find(|action| action.signal() == signal) else {
            debug!("No action registered for signal '{signal}'");
            return false;
        };
        action.execute(row_id);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
