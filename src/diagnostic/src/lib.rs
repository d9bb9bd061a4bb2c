//! Diagnostics - user-readable messages about IDL input.
//!
//! Both fatal errors and the warnings raised in permissive mode end up as a
//! [`Diagnostic`], which is collected by a [`DiagnosticCoordinator`] and
//! shown through an [`Emitter`].

mod caret;
mod diagnostic;
mod diagnostic_coordinator;
mod emitter;
mod highlight;
mod input_coordinator;
mod level;
mod message;
mod span;

pub use self::{
    caret::Caret,
    diagnostic::Diagnostic,
    diagnostic_coordinator::DiagnosticCoordinator,
    emitter::{ASCIIEmitter, Emitter, FancyEmitter},
    input_coordinator::{InputCoordinator, InputId},
    level::Level,
    span::Span,
};
