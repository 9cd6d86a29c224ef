//! Rounding a timecode to a whole component.

use crate::components::{Component, Components};
use crate::convert;
use crate::error::Result;
use crate::properties::TimecodeProperties;
use crate::timecode::Timecode;
use crate::validation::{self, ValidationRule};

impl Timecode {
    /// Round down to a whole `component`, zeroing every less significant
    /// field.
    ///
    /// At the start of a drop-frame minute the frames field lands on the
    /// first frame number that exists rather than on zero.
    #[must_use]
    pub fn rounded_down(&self, component: Component) -> Self {
        let mut result = *self;
        result.set_components(self.truncated_components(component));
        result
    }

    /// Round down in place.
    pub fn round_down(&mut self, component: Component) {
        *self = self.rounded_down(component);
    }

    /// Round up to a whole `component`. A value already on a whole
    /// `component` is returned unchanged.
    ///
    /// # Errors
    ///
    /// [`TimecodeError::InvalidComponents`](crate::TimecodeError::InvalidComponents)
    /// when the rounded value passes the upper limit.
    pub fn rounded_up(&self, component: Component) -> Result<Self> {
        let down = self.rounded_down(component);
        if down.components() == self.components() {
            return Ok(*self);
        }

        let properties = self.properties();
        let mut candidate = down.components();
        candidate.set(component, candidate.get(component) + 1);
        raise_frames_to_minimum(&mut candidate, &properties);

        // carry through the frame count so that overflowing fields normalize
        let count = convert::components_to_frame_count(
            &candidate,
            properties.frame_rate,
            properties.sub_frames_base,
        );
        self.setting(count, ValidationRule::Exact)
    }

    /// Round up in place. `self` is unchanged on error.
    pub fn round_up(&mut self, component: Component) -> Result<()> {
        *self = self.rounded_up(component)?;
        Ok(())
    }

    fn truncated_components(&self, component: Component) -> Components {
        let mut components = self.components();
        for less in component.less_significant() {
            components.set(*less, 0);
        }
        raise_frames_to_minimum(&mut components, &self.properties());
        components
    }
}

fn raise_frames_to_minimum(
    components: &mut Components,
    properties: &TimecodeProperties,
) {
    let minimum = *validation::valid_range(Component::Frames, components, properties).start();
    if components.frames < minimum {
        components.frames = minimum;
    }
}
