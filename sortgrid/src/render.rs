//! Renderer seam: anything that paints a [`Projection`].

use crate::projection::Projection;

/// Paints projections.
///
/// A renderer receives a fresh [`Projection`] after every sort transition and
/// is expected to repaint from scratch.
pub trait Renderer {
    /// Error raised while painting.
    type Error;

    /// Paint one projection.
    fn paint(&mut self, projection: &Projection) -> Result<(), Self::Error>;
}

impl<P: Renderer + ?Sized> Renderer for &mut P {
    type Error = P::Error;

    fn paint(&mut self, projection: &Projection) -> Result<(), Self::Error> {
        (**self).paint(projection)
    }
}

/// Collects every painted projection. Useful for tests and headless callers.
#[derive(Debug, Default)]
pub struct Recorder {
    pub frames: Vec<Projection>,
}

impl Recorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently painted projection.
    pub fn last(&self) -> Option<&Projection> {
        self.frames.last()
    }
}

impl Renderer for Recorder {
    type Error = std::convert::Infallible;

    fn paint(&mut self, projection: &Projection) -> Result<(), Self::Error> {
        self.frames.push(projection.clone());
        Ok(())
    }
}
