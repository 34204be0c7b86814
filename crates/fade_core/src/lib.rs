//! Fade Core
//!
//! Smooth, eased gradient fades for CSS utility frameworks.
//!
//! - **Stop Table**: hand-tuned stop profiles for 2 to 24 steps
//! - **Stop Generator**: table lookup for the default curve, sampled easing
//!   curves for everything else
//! - **Class Resolver**: shortest class list for any combination of color,
//!   direction, steps and easing
//! - **Utilities**: every fade class precomputed for a plugin host
//!
//! # Example
//!
//! ```rust
//! use fade_core::{Direction, Easing, GradientSpec};
//!
//! let spec = GradientSpec::new("blue")
//!     .direction(Direction::Top)
//!     .steps(12)
//!     .easing(Easing::Linear);
//!
//! assert_eq!(spec.classes(), vec!["fade-from-blue-500", "fade-to-t", "fade-linear-12"]);
//! assert_eq!(spec.stops().len(), 12);
//! ```

pub mod classes;
pub mod config;
pub mod direction;
pub mod easing;
pub mod error;
pub mod gradient;
pub mod overlay;
pub mod palette;
pub mod stops;
pub mod style;
pub mod stylesheet;
pub mod table;
pub mod utilities;

pub use classes::{fade_class, resolve_classes, simple_gradient_class};
pub use config::{FadeConfig, FadeSettings};
pub use direction::Direction;
pub use easing::Easing;
pub use error::{FadeError, Result};
pub use gradient::GradientSpec;
pub use overlay::{generate_css, gradient_data, GradientData, Overlay};
pub use palette::{ColorToken, FlatPalette, Palette, PaletteEntry};
pub use stops::{generate, gradient_stops, GradientStop, StopCache, DEFAULT_STEPS};
pub use style::StyleMap;
pub use stylesheet::Stylesheet;
pub use table::{lookup, StepProfile};
pub use utilities::{DynamicUtility, FadePlugin, ResolveFn, Utility, UtilityRegistry, ValueDomain};
