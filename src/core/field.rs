//! Umrechnung zwischen Anzeige-Fläche (Pixel) und Feld-Koordinaten (Zoll).

use super::error::{PathError, PathResult};
use glam::Vec2;

/// Millimeter pro Zoll.
pub const MM_PER_INCH: f32 = 25.4;

/// Rundet einen Feldwert auf zwei Nachkommastellen.
pub fn round_real(value: f32) -> f32 {
    let rounded = (value * 100.0).round() / 100.0;
    // -0.0 würde im Export als "-0.0" erscheinen
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Rundet beide Komponenten auf zwei Nachkommastellen.
pub fn round_real_vec(v: Vec2) -> Vec2 {
    Vec2::new(round_real(v.x), round_real(v.y))
}

/// Lineare Abbildung Anzeige-Fläche ↔ Feld.
///
/// Der Ursprung liegt in der Mitte der Fläche, die Y-Achse zeigt im Feld nach
/// oben (auf der Fläche nach unten).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldTransform {
    /// Größe der Anzeige-Fläche in Pixeln
    surface_size: Vec2,
    /// Kantenlänge des Feldes in Millimetern (gesamte Breite/Höhe)
    field_extent_mm: f32,
}

impl FieldTransform {
    /// Standard-Kantenlänge eines VEX-Feldes (-1800 mm bis 1800 mm).
    pub const DEFAULT_FIELD_EXTENT_MM: f32 = 3600.0;

    /// Erstellt eine Abbildung für eine Fläche der gegebenen Größe.
    pub fn new(surface_size: Vec2, field_extent_mm: f32) -> PathResult<Self> {
        if !surface_size.is_finite() || surface_size.x <= 0.0 || surface_size.y <= 0.0 {
            return Err(PathError::InvalidSurface(format!(
                "Fläche {}x{}",
                surface_size.x, surface_size.y
            )));
        }
        if !field_extent_mm.is_finite() || field_extent_mm <= 0.0 {
            return Err(PathError::InvalidSurface(format!(
                "Feldgröße {field_extent_mm} mm"
            )));
        }
        Ok(Self {
            surface_size,
            field_extent_mm,
        })
    }

    /// Größe der Anzeige-Fläche in Pixeln.
    pub fn surface_size(&self) -> Vec2 {
        self.surface_size
    }

    /// Kantenlänge des Feldes in Millimetern.
    pub fn field_extent_mm(&self) -> f32 {
        self.field_extent_mm
    }

    /// Halbe Feldbreite in Zoll (sichtbarer Bereich je Richtung).
    pub fn half_extent_inches(&self) -> f32 {
        self.field_extent_mm / 2.0 / MM_PER_INCH
    }

    /// Millimeter pro Pixel (x, y).
    fn mm_per_pixel(&self) -> Vec2 {
        Vec2::splat(self.field_extent_mm) / self.surface_size
    }

    /// Konvertiert eine Flächenposition in Feld-Zoll, gerundet auf 0.01.
    pub fn display_to_real(&self, display: Vec2) -> Vec2 {
        let center = self.surface_size * 0.5;
        let mm = self.mm_per_pixel();
        round_real_vec(Vec2::new(
            (display.x - center.x) * mm.x / MM_PER_INCH,
            (center.y - display.y) * mm.y / MM_PER_INCH,
        ))
    }

    /// Konvertiert Feld-Zoll in eine Flächenposition (ungerundet).
    pub fn real_to_display(&self, real: Vec2) -> Vec2 {
        let center = self.surface_size * 0.5;
        let mm = real * MM_PER_INCH;
        Vec2::new(
            center.x + mm.x / self.field_extent_mm * self.surface_size.x,
            center.y - mm.y / self.field_extent_mm * self.surface_size.y,
        )
    }

    /// Prüft ob eine Flächenposition auf dem Feld liegt (Rand inklusive).
    pub fn contains_display(&self, display: Vec2) -> bool {
        display.is_finite()
            && display.x >= 0.0
            && display.y >= 0.0
            && display.x <= self.surface_size.x
            && display.y <= self.surface_size.y
    }
}

impl Default for FieldTransform {
    fn default() -> Self {
        Self {
            surface_size: Vec2::new(720.0, 720.0),
            field_extent_mm: Self::DEFAULT_FIELD_EXTENT_MM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_center_maps_to_origin() {
        let field = FieldTransform::default();
        let real = field.display_to_real(Vec2::new(360.0, 360.0));
        assert_relative_eq!(real.x, 0.0);
        assert_relative_eq!(real.y, 0.0);
    }

    #[test]
    fn test_y_axis_is_inverted() {
        let field = FieldTransform::default();
        // Oben links auf der Fläche → links oben im Feld
        let real = field.display_to_real(Vec2::ZERO);
        assert!(real.x < 0.0);
        assert!(real.y > 0.0);
        assert_relative_eq!(real.y, field.half_extent_inches(), epsilon = 0.01);
    }

    fn assert_roundtrip_over_field(field: &FieldTransform) {
        const STEP: f32 = 0.37;
        let half = field.half_extent_inches();
        let steps = (2.0 * half / STEP) as usize;
        for i in 0..=steps {
            for j in 0..=steps {
                let p = round_real_vec(Vec2::new(
                    -half + i as f32 * STEP,
                    -half + j as f32 * STEP,
                ));
                let back = field.display_to_real(field.real_to_display(p));
                assert_relative_eq!(back.x, p.x, epsilon = 0.01);
                assert_relative_eq!(back.y, p.y, epsilon = 0.01);
            }
        }
    }

    #[test]
    fn test_roundtrip_real_display_real_default_surface() {
        assert_roundtrip_over_field(&FieldTransform::default());
    }

    #[test]
    fn test_roundtrip_real_display_real_non_square_surface() {
        let field = FieldTransform::new(Vec2::new(800.0, 600.0), 3600.0).unwrap();
        assert_roundtrip_over_field(&field);
    }

    #[test]
    fn test_display_to_real_rounds_to_hundredths() {
        let field = FieldTransform::default();
        let real = field.display_to_real(Vec2::new(361.0, 359.0));
        // 1 px = 5 mm = 0.19685 in
        assert_relative_eq!(real.x, 0.2);
        assert_relative_eq!(real.y, 0.2);
    }

    #[test]
    fn test_new_rejects_invalid_sizes() {
        assert!(FieldTransform::new(Vec2::new(0.0, 10.0), 3600.0).is_err());
        assert!(FieldTransform::new(Vec2::new(10.0, f32::NAN), 3600.0).is_err());
        assert!(FieldTransform::new(Vec2::new(10.0, 10.0), -1.0).is_err());
    }

    #[test]
    fn test_contains_display() {
        let field = FieldTransform::default();
        assert!(field.contains_display(Vec2::new(0.0, 720.0)));
        assert!(!field.contains_display(Vec2::new(-1.0, 10.0)));
        assert!(!field.contains_display(Vec2::new(10.0, 721.0)));
    }
}
