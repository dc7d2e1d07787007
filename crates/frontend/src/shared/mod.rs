pub mod format;
pub mod i18n;
pub mod icons;
pub mod scroll;
pub mod theme;
