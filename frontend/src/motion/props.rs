use std::collections::BTreeMap;

/// Visual properties the sequencer knows how to interpolate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Prop {
    /// Auto-alpha: an opacity of zero also hides the element.
    Opacity,
    /// Vertical offset in px.
    Y,
    /// Degrees.
    Rotation,
    /// Degrees, around the horizontal axis.
    RotationX,
    Scale,
    ScaleY,
    /// Blur radius in px.
    Blur,
}

/// Perspective used whenever a 3D rotation is present.
const PERSPECTIVE_PX: f64 = 900.0;

/// A sparse set of property values for one target.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertySet {
    values: BTreeMap<Prop, f64>,
}

impl PropertySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, prop: Prop, value: f64) -> Self {
        self.values.insert(prop, value);
        self
    }

    pub fn insert(&mut self, prop: Prop, value: f64) {
        self.values.insert(prop, value);
    }

    pub fn get(&self, prop: Prop) -> Option<f64> {
        self.values.get(&prop).copied()
    }

    pub fn contains(&self, prop: Prop) -> bool {
        self.values.contains_key(&prop)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Prop, f64)> + '_ {
        self.values.iter().map(|(p, v)| (*p, *v))
    }

    /// Overwrites every property present in `other`.
    pub fn merge(&mut self, other: &PropertySet) {
        for (prop, value) in other.iter() {
            self.values.insert(prop, value);
        }
    }

    /// CSS declarations for this set. Only properties that are present are
    /// emitted so static inline styles on the element survive.
    pub fn css_declarations(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();

        if let Some(opacity) = self.get(Prop::Opacity) {
            out.push(("opacity", format_num(opacity)));
            let visibility = if opacity <= 0.0 { "hidden" } else { "visible" };
            out.push(("visibility", visibility.to_string()));
        }

        let mut transform = Vec::new();
        if self.contains(Prop::RotationX) {
            transform.push(format!("perspective({}px)", format_num(PERSPECTIVE_PX)));
        }
        if let Some(y) = self.get(Prop::Y) {
            transform.push(format!("translate3d(0, {}px, 0)", format_num(y)));
        }
        if let Some(deg) = self.get(Prop::Rotation) {
            transform.push(format!("rotate({}deg)", format_num(deg)));
        }
        if let Some(deg) = self.get(Prop::RotationX) {
            transform.push(format!("rotateX({}deg)", format_num(deg)));
        }
        if let Some(scale) = self.get(Prop::Scale) {
            transform.push(format!("scale({})", format_num(scale)));
        }
        if let Some(scale) = self.get(Prop::ScaleY) {
            transform.push(format!("scaleY({})", format_num(scale)));
        }
        if !transform.is_empty() {
            out.push(("transform", transform.join(" ")));
        }

        if let Some(blur) = self.get(Prop::Blur) {
            out.push(("filter", format!("blur({}px)", format_num(blur.max(0.0)))));
        }

        out
    }
}

fn format_num(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    // -0 would otherwise print as "-0"
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

/// Resolved values for every target, keyed by the target's ordinal.
pub type Frame = BTreeMap<usize, PropertySet>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_opacity_hides_the_element() {
        let css = PropertySet::new().with(Prop::Opacity, 0.0).css_declarations();
        assert_eq!(css[0], ("opacity", "0".to_string()));
        assert_eq!(css[1], ("visibility", "hidden".to_string()));
    }

    #[test]
    fn transform_parts_keep_a_fixed_order() {
        let set = PropertySet::new()
            .with(Prop::Scale, 0.96)
            .with(Prop::Y, -160.0)
            .with(Prop::RotationX, 18.0)
            .with(Prop::Rotation, -10.0);
        let transform = set
            .css_declarations()
            .into_iter()
            .find(|(name, _)| *name == "transform")
            .map(|(_, value)| value);
        assert_eq!(
            transform.as_deref(),
            Some("perspective(900px) translate3d(0, -160px, 0) rotate(-10deg) rotateX(18deg) scale(0.96)")
        );
    }

    #[test]
    fn absent_properties_emit_nothing() {
        assert!(PropertySet::new().css_declarations().is_empty());
        let only_blur = PropertySet::new().with(Prop::Blur, 6.0).css_declarations();
        assert_eq!(only_blur, vec![("filter", "blur(6px)".to_string())]);
    }

    #[test]
    fn merge_overwrites_present_keys_only() {
        let mut base = PropertySet::new().with(Prop::Y, 10.0).with(Prop::Opacity, 0.0);
        base.merge(&PropertySet::new().with(Prop::Opacity, 1.0));
        assert_eq!(base.get(Prop::Y), Some(10.0));
        assert_eq!(base.get(Prop::Opacity), Some(1.0));
    }
}
