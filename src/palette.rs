//! Fixed color palette for track identity.
//!
//! Colors are assigned purely by upload order and cycle once the batch
//! exceeds the palette length; repetition past ten tracks is intentional.

/// Ten visually distinct colors, cycled by upload index.
pub const PALETTE: [&str; 10] = [
    "#e6194b", // red
    "#3cb44b", // green
    "#4363d8", // blue
    "#f58231", // orange
    "#911eb4", // purple
    "#42d4f4", // cyan
    "#f032e6", // magenta
    "#9a6324", // brown
    "#808000", // olive
    "#000075", // navy
];

/// Color for the track at `upload_index`. Pure: the same index always yields
/// the same color.
pub fn color_for_index(upload_index: usize) -> &'static str {
    PALETTE[upload_index % PALETTE.len()]
}
