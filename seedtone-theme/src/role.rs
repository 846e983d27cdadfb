//! Color role definitions.
//!
//! Every role is one semantic slot of the generated palette and one CSS custom
//! property in the live style namespace.

use std::fmt;

/// Prefix shared by every style property name.
pub const PROPERTY_PREFIX: &str = "--md-sys-color-";

/// Semantic color roles produced by the palette generator.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    // Primary
    Primary,
    OnPrimary,
    PrimaryContainer,
    OnPrimaryContainer,

    // Secondary
    Secondary,
    OnSecondary,
    SecondaryContainer,
    OnSecondaryContainer,

    // Tertiary
    Tertiary,
    OnTertiary,
    TertiaryContainer,
    OnTertiaryContainer,

    // Surface
    Surface,
    OnSurface,
    SurfaceVariant,
    OnSurfaceVariant,
    SurfaceContainer,
    SurfaceContainerHigh,
    SurfaceContainerHighest,
    SurfaceContainerLow,
    SurfaceContainerLowest,

    // Outline
    Outline,
    OutlineVariant,

    // Background
    Background,
    OnBackground,
}

impl Role {
    /// Number of roles.
    pub const COUNT: usize = 25;

    /// All roles, in the order they are written to the style namespace.
    pub const ALL: [Role; Role::COUNT] = [
        Role::Primary,
        Role::OnPrimary,
        Role::PrimaryContainer,
        Role::OnPrimaryContainer,
        Role::Secondary,
        Role::OnSecondary,
        Role::SecondaryContainer,
        Role::OnSecondaryContainer,
        Role::Tertiary,
        Role::OnTertiary,
        Role::TertiaryContainer,
        Role::OnTertiaryContainer,
        Role::Surface,
        Role::OnSurface,
        Role::SurfaceVariant,
        Role::OnSurfaceVariant,
        Role::SurfaceContainer,
        Role::SurfaceContainerHigh,
        Role::SurfaceContainerHighest,
        Role::SurfaceContainerLow,
        Role::SurfaceContainerLowest,
        Role::Outline,
        Role::OutlineVariant,
        Role::Background,
        Role::OnBackground,
    ];

    /// Position of this role in [Role::ALL].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Get the camelCase name of the role (used for JSON keys).
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::OnPrimary => "onPrimary",
            Role::PrimaryContainer => "primaryContainer",
            Role::OnPrimaryContainer => "onPrimaryContainer",
            Role::Secondary => "secondary",
            Role::OnSecondary => "onSecondary",
            Role::SecondaryContainer => "secondaryContainer",
            Role::OnSecondaryContainer => "onSecondaryContainer",
            Role::Tertiary => "tertiary",
            Role::OnTertiary => "onTertiary",
            Role::TertiaryContainer => "tertiaryContainer",
            Role::OnTertiaryContainer => "onTertiaryContainer",
            Role::Surface => "surface",
            Role::OnSurface => "onSurface",
            Role::SurfaceVariant => "surfaceVariant",
            Role::OnSurfaceVariant => "onSurfaceVariant",
            Role::SurfaceContainer => "surfaceContainer",
            Role::SurfaceContainerHigh => "surfaceContainerHigh",
            Role::SurfaceContainerHighest => "surfaceContainerHighest",
            Role::SurfaceContainerLow => "surfaceContainerLow",
            Role::SurfaceContainerLowest => "surfaceContainerLowest",
            Role::Outline => "outline",
            Role::OutlineVariant => "outlineVariant",
            Role::Background => "background",
            Role::OnBackground => "onBackground",
        }
    }

    /// Parse a role from its camelCase name.
    pub fn from_str(s: &str) -> Option<Self> {
        Role::ALL.iter().copied().find(|role| role.as_str() == s)
    }

    /// Get the style property this role is written to.
    ///
    /// Stylesheets bind to these names, so they must never change on their own.
    pub fn property_name(&self) -> &'static str {
        match self {
            Role::Primary => "--md-sys-color-primary",
            Role::OnPrimary => "--md-sys-color-on-primary",
            Role::PrimaryContainer => "--md-sys-color-primary-container",
            Role::OnPrimaryContainer => "--md-sys-color-on-primary-container",
            Role::Secondary => "--md-sys-color-secondary",
            Role::OnSecondary => "--md-sys-color-on-secondary",
            Role::SecondaryContainer => "--md-sys-color-secondary-container",
            Role::OnSecondaryContainer => "--md-sys-color-on-secondary-container",
            Role::Tertiary => "--md-sys-color-tertiary",
            Role::OnTertiary => "--md-sys-color-on-tertiary",
            Role::TertiaryContainer => "--md-sys-color-tertiary-container",
            Role::OnTertiaryContainer => "--md-sys-color-on-tertiary-container",
            Role::Surface => "--md-sys-color-surface",
            Role::OnSurface => "--md-sys-color-on-surface",
            Role::SurfaceVariant => "--md-sys-color-surface-variant",
            Role::OnSurfaceVariant => "--md-sys-color-on-surface-variant",
            Role::SurfaceContainer => "--md-sys-color-surface-container",
            Role::SurfaceContainerHigh => "--md-sys-color-surface-container-high",
            Role::SurfaceContainerHighest => "--md-sys-color-surface-container-highest",
            Role::SurfaceContainerLow => "--md-sys-color-surface-container-low",
            Role::SurfaceContainerLowest => "--md-sys-color-surface-container-lowest",
            Role::Outline => "--md-sys-color-outline",
            Role::OutlineVariant => "--md-sys-color-outline-variant",
            Role::Background => "--md-sys-color-background",
            Role::OnBackground => "--md-sys-color-on-background",
        }
    }

    /// Parse a role from its style property name.
    pub fn from_property_name(name: &str) -> Option<Self> {
        Role::ALL
            .iter()
            .copied()
            .find(|role| role.property_name() == name)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
