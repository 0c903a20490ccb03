//! # Announcing systems
//!
//! A wrapper around an ordinary system that tells what it is doing. Results are never affected by
//! the announcements.
use std::cell::RefCell;
use std::io::Write;

use enum_map::{EnumMap, enum_map};
use tracing::warn;

use crate::data::linear_program::elements::{Operation, Stage};
use crate::data::linear_program::error::Dimension;
use crate::data::linear_program::system::{LinearSystem, OrdinarySystem};
use crate::data::number_types::traits::Real;
use crate::io::console::ReadReal;
use crate::io::error::Input;

const RELEASED: &str = "Special system: resources released.";

/// A system that writes a line before and after rendering and checking, and when it is dropped.
#[derive(Debug)]
pub struct SpecialSystem<F, W: Write> {
    system: OrdinarySystem<F>,
    /// Only borrowed for the duration of a single line.
    announcements: RefCell<W>,
    messages: EnumMap<Operation, EnumMap<Stage, &'static str>>,
}

impl<F: Real, W: Write> SpecialSystem<F, W> {
    /// Wrap a system.
    ///
    /// # Arguments
    ///
    /// * `system`: Performs the actual operations.
    /// * `announcements`: Where the announcements are written to, line by line.
    pub fn new(system: OrdinarySystem<F>, announcements: W) -> Self {
        Self {
            system,
            announcements: RefCell::new(announcements),
            messages: enum_map! {
                Operation::Render => enum_map! {
                    Stage::Before => "Special system: rendering the inequalities.",
                    Stage::After => "Special system: rendering done.",
                },
                Operation::Check => enum_map! {
                    Stage::Before => "Special system: checking the vector.",
                    Stage::After => "Special system: check done.",
                },
            },
        }
    }

    /// The wrapped system.
    #[must_use]
    pub fn system(&self) -> &OrdinarySystem<F> {
        &self.system
    }

    fn announce(&self, operation: Operation, stage: Stage) {
        write_announcement(&mut *self.announcements.borrow_mut(), self.messages[operation][stage]);
    }
}

impl<F: Real, W: Write> LinearSystem<F> for SpecialSystem<F, W> {
    fn inequality_count(&self) -> usize {
        self.system.inequality_count()
    }

    fn variable_count(&self) -> usize {
        self.system.variable_count()
    }

    fn input_coefficients(&mut self, reader: &mut dyn ReadReal<F>) -> Result<(), Input> {
        self.system.input_coefficients(reader)
    }

    fn render(&self) -> String {
        self.announce(Operation::Render, Stage::Before);
        let text = self.system.render();
        self.announce(Operation::Render, Stage::After);

        text
    }

    fn check_vector(&self, variables: &[F]) -> Result<bool, Dimension> {
        self.announce(Operation::Check, Stage::Before);
        let result = self.system.check_vector(variables);
        self.announce(Operation::Check, Stage::After);

        result
    }
}

impl<F, W: Write> Drop for SpecialSystem<F, W> {
    fn drop(&mut self) {
        write_announcement(self.announcements.get_mut(), RELEASED);
    }
}

fn write_announcement<W: Write>(sink: &mut W, message: &str) {
    if let Err(error) = writeln!(sink, "{}", message).and_then(|()| sink.flush()) {
        warn!(%error, announcement = message, "could not write announcement");
    }
}
