//! Terminal implementation of the form surface.

use crate::form::{Banner, BannerKind, Field, FormSurface};

/// Renders controller output to the terminal.
///
/// Status and progress go to stderr so piped output stays clean; banners
/// print once and are "dismissed" by scrolling away.
pub struct ConsoleSurface;

impl FormSurface for ConsoleSurface {
    fn set_field(&mut self, _field: Field, _value: &str) {
        // A terminal has no live fields to mirror
    }

    fn show_field_error(&mut self, field: Field, message: &str) {
        eprintln!("  {}: {}", field, message);
    }

    fn clear_field_error(&mut self, _field: Field) {
        // Nothing persistent to clear
    }

    fn set_submitting(&mut self, submitting: bool) {
        if submitting {
            eprintln!("Sending your message, please wait...");
        }
    }

    fn show_banner(&mut self, banner: &Banner) {
        match banner.kind {
            BannerKind::Success => println!("{}", banner.message),
            BannerKind::Error => eprintln!("{}", banner.message),
        }
    }

    fn reset_fields(&mut self) {
        // Nothing persistent to reset
    }

    fn navigate(&mut self, target: &str) {
        println!("Next: {}", target);
    }
}
