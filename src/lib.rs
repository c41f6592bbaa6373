//! Responsive style resolution for declarative layout components.
//!
//! Components declare layout intent as small named tokens (`gap: "lg"`,
//! `container: { base: "full", xl: "7xl" }`) and an optional layout template.
//! This crate turns those declarations into a complete, validated style set
//! with one token per dimension at every breakpoint, plus the utility classes
//! that express it.
//!
//! # Pipeline
//!
//! 1. [`normalize`] forward-fills a [`ResponsiveValue`] over the breakpoint
//!    scale into a [`ResolvedResponsive`]
//! 2. [`LayoutTemplate::expand`] yields the dimension values a template implies
//! 3. [`Resolver::resolve`] merges explicit props, template values and
//!    defaults per dimension, then [`validate`]s every token
//! 4. [`ResolvedStyleSet::class_string`] renders the result as classes
//!
//! Precedence per dimension is explicit prop, then template, then default.
//! An explicit value replaces the template value as a whole; breakpoints are
//! never mixed across sources.
//!
//! # Example
//!
//! ```rust
//! use framekit::{resolve, Breakpoint, Dimension, LayoutTemplate, StyleProps};
//!
//! let props = StyleProps::new().set(Dimension::Gap, "lg");
//! let style = resolve(&props, Some(LayoutTemplate::StatsRow)).unwrap();
//!
//! assert_eq!(style.token(Dimension::Grid, Breakpoint::Xs).unwrap(), "1");
//! assert_eq!(style.token(Dimension::Grid, Breakpoint::Md).unwrap(), "2");
//! assert_eq!(style.token(Dimension::Grid, Breakpoint::Xl).unwrap(), "4");
//! assert_eq!(style.token(Dimension::Gap, Breakpoint::Base).unwrap(), "lg");
//! ```
//!
//! # Modules
//!
//! - [`breakpoint`]: the ordered breakpoint scale
//! - [`token`]: dimensions, catalogs and validation
//! - [`responsive`]: responsive values and normalization
//! - [`template`]: named layout templates
//! - [`resolve`]: the style resolver
//! - [`class`]: token to utility-class mapping
//! - [`icon`]: icon name lookup
//! - [`components`]: component prop shapes
//! - [`config`]: loading props from JSON or YAML files
//!
//! Diagnostics go through `tracing`; install a subscriber to see them.

pub mod breakpoint;
pub mod class;
pub mod components;
pub mod config;
pub mod error;
pub mod icon;
pub mod resolve;
pub mod responsive;
pub mod template;
pub mod token;

mod util;

pub use breakpoint::{Breakpoint, UnknownBreakpoint};
pub use class::{class_name, GRID_AUTO_FILL, GRID_AUTO_FIT};
pub use components::{
    BadgeProps, BadgeSize, BadgeVariant, BaseProps, BrowserConfig, ButtonProps, ButtonSize,
    ButtonStyle, ButtonVariant, CodeConfig, CodeTheme, FrameProps, FrameVariant, IconPosition,
    InputAddon, InputProps, InputState, InputType, InputValue, InputVariant, TabConfig,
    TerminalConfig, TerminalTheme, WindowHeaderConfig, WindowProps, WindowStyle, WindowType,
    INPUT_SIZES,
};
pub use config::{load_frame, load_props, ConfigFormat};
pub use error::{Result, StyleError};
pub use icon::{resolve_icon, AssetHandle, IconError, IconName};
pub use resolve::{resolve, resolve_named, ResolvedStyleSet, Resolver, StyleProps};
pub use responsive::{normalize, ResolvedResponsive, ResponsiveValue};
pub use template::{expand as expand_template, LayoutTemplate, TemplateAssignment};
pub use token::{validate, Dimension, Token};
