//! Fujifilm maker note tag IDs and IFD field types

// Maker note layout
pub const MAKER_NOTE_SIGNATURE: &[u8; 8] = b"FUJIFILM";
pub const MAKER_NOTE_HEADER_LEN: usize = 12;
pub const IFD_ENTRY_LEN: usize = 12;

// Tags read by the simulation resolver
pub const SATURATION: u16 = 0x1003;
pub const FILM_MODE: u16 = 0x1401;

// Other tags commonly present, used for diagnostics only
pub const VERSION: u16 = 0x0000;
pub const SERIAL_NUMBER: u16 = 0x0010;
pub const QUALITY: u16 = 0x1000;
pub const SHARPNESS: u16 = 0x1001;
pub const WHITE_BALANCE: u16 = 0x1002;
pub const DYNAMIC_RANGE: u16 = 0x1400;
pub const GRAIN_EFFECT_ROUGHNESS: u16 = 0x1047;
pub const COLOR_CHROME_EFFECT: u16 = 0x1048;

// IFD field types
pub const TYPE_BYTE: u16 = 1;
pub const TYPE_ASCII: u16 = 2;
pub const TYPE_SHORT: u16 = 3;
pub const TYPE_LONG: u16 = 4;
pub const TYPE_RATIONAL: u16 = 5;
pub const TYPE_SBYTE: u16 = 6;
pub const TYPE_UNDEFINED: u16 = 7;
pub const TYPE_SSHORT: u16 = 8;
pub const TYPE_SLONG: u16 = 9;
pub const TYPE_SRATIONAL: u16 = 10;
pub const TYPE_FLOAT: u16 = 11;
pub const TYPE_DOUBLE: u16 = 12;

/// Returns a human-readable name for a known maker note tag
pub fn tag_name(tag: u16) -> Option<&'static str> {
    match tag {
        VERSION => Some("Version"),
        SERIAL_NUMBER => Some("InternalSerialNumber"),
        QUALITY => Some("Quality"),
        SHARPNESS => Some("Sharpness"),
        WHITE_BALANCE => Some("WhiteBalance"),
        SATURATION => Some("Saturation"),
        DYNAMIC_RANGE => Some("DynamicRange"),
        FILM_MODE => Some("FilmMode"),
        GRAIN_EFFECT_ROUGHNESS => Some("GrainEffectRoughness"),
        COLOR_CHROME_EFFECT => Some("ColorChromeEffect"),
        _ => None,
    }
}

/// Returns the size in bytes of one component of an IFD field type
///
/// Returns `None` for unknown field types.
pub fn component_size(field_type: u16) -> Option<usize> {
    match field_type {
        TYPE_BYTE | TYPE_ASCII | TYPE_SBYTE | TYPE_UNDEFINED => Some(1),
        TYPE_SHORT | TYPE_SSHORT => Some(2),
        TYPE_LONG | TYPE_SLONG | TYPE_FLOAT => Some(4),
        TYPE_RATIONAL | TYPE_SRATIONAL | TYPE_DOUBLE => Some(8),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_values() {
        assert_eq!(SATURATION, 0x1003);
        assert_eq!(FILM_MODE, 0x1401);
        assert_eq!(MAKER_NOTE_SIGNATURE.len() + 4, MAKER_NOTE_HEADER_LEN);
    }

    #[test]
    fn test_component_size() {
        assert_eq!(component_size(TYPE_SHORT), Some(2));
        assert_eq!(component_size(TYPE_RATIONAL), Some(8));
        assert_eq!(component_size(TYPE_ASCII), Some(1));
        assert_eq!(component_size(0), None);
        assert_eq!(component_size(13), None);
    }

    #[test]
    fn test_tag_name() {
        assert_eq!(tag_name(SATURATION), Some("Saturation"));
        assert_eq!(tag_name(FILM_MODE), Some("FilmMode"));
        assert_eq!(tag_name(0xbeef), None);
    }
}
