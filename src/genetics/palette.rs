use crate::foundation::core::Rgb;

/// Marker grays used as placeholders in sprite art, in assignment order.
pub const MARKER_PALETTE: [Rgb; 11] = [
    [195, 195, 195],
    [212, 212, 212],
    [224, 224, 224],
    [235, 235, 235],
    [201, 201, 201],
    [194, 194, 194],
    [189, 189, 189],
    [181, 181, 181],
    [171, 171, 171],
    [247, 247, 247],
    [252, 252, 252],
];

/// The main body marker; always painted with the cat's main color.
pub const PRIMARY_MARKER: Rgb = [252, 252, 252];

pub fn is_marker(color: Rgb) -> bool {
    MARKER_PALETTE.contains(&color)
}
