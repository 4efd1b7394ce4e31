// Rating slider state.
// Keeps slider position, active label, and track fill consistent.

/// Lowest slider value.
pub const SLIDER_MIN: u8 = 1;
/// Highest slider value.
pub const SLIDER_MAX: u8 = 5;
/// Value every slider starts at.
pub const SLIDER_DEFAULT: u8 = 3;

/// The qualitative dimensions a business is rated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Food,
    Service,
    Atmosphere,
    Recommend,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Food,
        Dimension::Service,
        Dimension::Atmosphere,
        Dimension::Recommend,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Dimension::Food => "Food Quality",
            Dimension::Service => "Service",
            Dimension::Atmosphere => "Atmosphere",
            Dimension::Recommend => "Would Recommend",
        }
    }

    /// Form field the backend reads this rating from.
    pub fn field_name(&self) -> &'static str {
        match self {
            Dimension::Food => "food_rating",
            Dimension::Service => "service_rating",
            Dimension::Atmosphere => "atmosphere_rating",
            Dimension::Recommend => "recommend_rating",
        }
    }

    /// One label per slider value, lowest first.
    pub fn labels(&self) -> [&'static str; 5] {
        match self {
            Dimension::Food => ["Poor", "Fair", "Good", "Great", "Amazing"],
            Dimension::Service => ["Slow", "Okay", "Good", "Fast", "Excellent"],
            Dimension::Atmosphere => ["Dull", "Plain", "Nice", "Lovely", "Perfect"],
            Dimension::Recommend => ["No", "Unlikely", "Maybe", "Likely", "Definitely"],
        }
    }
}

/// A discrete 1-5 rating control.
///
/// The position may be fractional while the user drags; the active label and
/// fill are always derived from the integer part, so they cannot drift apart.
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    pub dimension: Dimension,
    position: f64,
}

impl Slider {
    pub fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            position: SLIDER_DEFAULT as f64,
        }
    }

    /// Live drag feedback. The track keeps the position inside its range but
    /// no rounding is applied.
    pub fn raw_input(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }
        self.position = value.clamp(SLIDER_MIN as f64, SLIDER_MAX as f64);
    }

    /// Snap to the nearest whole value, clamp, then reapply as raw input.
    pub fn commit(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }
        let snapped = value.round().clamp(SLIDER_MIN as f64, SLIDER_MAX as f64);
        self.raw_input(snapped);
    }

    /// A label click is a full user-driven change to `index + 1`.
    pub fn click_label(&mut self, index: usize) {
        let index = index.min(self.dimension.labels().len() - 1);
        let value = (index + 1) as f64;
        self.raw_input(value);
        self.commit(value);
    }

    /// Commit whatever position a drag left behind.
    pub fn settle(&mut self) {
        self.commit(self.position);
    }

    /// Current position, possibly fractional mid-drag.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Integer value of the slider.
    pub fn value(&self) -> u8 {
        self.position.trunc() as u8
    }

    /// Index of the single active label.
    pub fn active_label(&self) -> usize {
        (self.value() - SLIDER_MIN) as usize
    }

    /// Track fill as a percentage: `(value-1)/(max-1) * 100`.
    pub fn fill_percent(&self) -> f64 {
        (self.value() - SLIDER_MIN) as f64 / (SLIDER_MAX - SLIDER_MIN) as f64 * 100.0
    }

    pub fn is_label_active(&self, index: usize) -> bool {
        index == self.active_label()
    }

    pub fn active_label_text(&self) -> &'static str {
        self.dimension.labels()[self.active_label()]
    }
}

/// All rating sliders, one per dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingSliders {
    sliders: Vec<Slider>,
}

impl Default for RatingSliders {
    fn default() -> Self {
        Self {
            sliders: Dimension::ALL.iter().map(|d| Slider::new(*d)).collect(),
        }
    }
}

impl RatingSliders {
    pub fn get(&self, dimension: Dimension) -> &Slider {
        &self.sliders[Self::index_of(dimension)]
    }

    pub fn get_mut(&mut self, dimension: Dimension) -> &mut Slider {
        &mut self.sliders[Self::index_of(dimension)]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slider> {
        self.sliders.iter()
    }

    /// Commit every slider left mid-drag.
    pub fn settle_all(&mut self) {
        for slider in &mut self.sliders {
            slider.settle();
        }
    }

    fn index_of(dimension: Dimension) -> usize {
        Dimension::ALL
            .iter()
            .position(|d| *d == dimension)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_value() {
        let slider = Slider::new(Dimension::Food);
        assert_eq!(slider.value(), 3);
        assert_eq!(slider.fill_percent(), 50.0);
        assert_eq!(slider.active_label_text(), "Good");
    }

    #[test]
    fn test_fill_and_label_for_every_value() {
        for v in 1..=5u8 {
            let mut slider = Slider::new(Dimension::Service);
            slider.commit(v as f64);

            assert_eq!(slider.fill_percent(), (v as f64 - 1.0) / 4.0 * 100.0);
            let active: Vec<usize> = (0..5).filter(|i| slider.is_label_active(*i)).collect();
            assert_eq!(active, vec![(v - 1) as usize]);
        }
    }

    #[test]
    fn test_raw_input_does_not_round() {
        let mut slider = Slider::new(Dimension::Food);
        slider.raw_input(4.7);

        assert_eq!(slider.position(), 4.7);
        assert_eq!(slider.value(), 4);
        assert_eq!(slider.fill_percent(), 75.0);
    }

    #[test]
    fn test_commit_rounds_and_clamps() {
        let mut slider = Slider::new(Dimension::Food);

        slider.commit(4.5);
        assert_eq!(slider.value(), 5);

        slider.commit(2.4);
        assert_eq!(slider.value(), 2);

        slider.commit(9.0);
        assert_eq!(slider.value(), 5);

        slider.commit(-3.0);
        assert_eq!(slider.value(), 1);
        assert_eq!(slider.fill_percent(), 0.0);
    }

    #[test]
    fn test_label_click() {
        let mut slider = Slider::new(Dimension::Recommend);
        slider.click_label(4);

        assert_eq!(slider.value(), 5);
        assert_eq!(slider.position(), 5.0);
        assert_eq!(slider.active_label_text(), "Definitely");
        assert_eq!(slider.fill_percent(), 100.0);
    }

    #[test]
    fn test_label_click_out_of_range_picks_last_label() {
        let mut slider = Slider::new(Dimension::Service);
        slider.click_label(usize::MAX);
        assert_eq!(slider.value(), 5);

        slider.click_label(0);
        slider.click_label(7);
        assert_eq!(slider.value(), 5);
    }

    #[test]
    fn test_settle_after_drag() {
        let mut sliders = RatingSliders::default();
        sliders.get_mut(Dimension::Atmosphere).raw_input(3.6);
        sliders.settle_all();

        assert_eq!(sliders.get(Dimension::Atmosphere).position(), 4.0);
        assert_eq!(sliders.get(Dimension::Food).position(), 3.0);
    }

    #[test]
    fn test_nan_is_ignored() {
        let mut slider = Slider::new(Dimension::Food);
        slider.raw_input(f64::NAN);
        slider.commit(f64::NAN);
        assert_eq!(slider.value(), 3);
    }
}
