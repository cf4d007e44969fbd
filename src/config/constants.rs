use keeplang_core::LayoutId;

pub const DEFAULT_LAYOUT: LayoutId = LayoutId::English;

pub const CYCLE_ORDER: [LayoutId; 4] = [
    LayoutId::English,
    LayoutId::Hebrew,
    LayoutId::German,
    LayoutId::Symbols,
];

pub const LANGUAGE_LAYOUTS: [(&str, LayoutId); 3] = [
    ("en", LayoutId::English),
    ("he", LayoutId::Hebrew),
    ("de", LayoutId::German),
];

pub const MAX_VELOCITY: f64 = 1000.0;
pub const VELOCITY_EPSILON: f64 = 50.0;
pub const PIXELS_PER_STEP: f64 = 12.0;
pub const MAX_STEPS_PER_TICK: u32 = 40;
