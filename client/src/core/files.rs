const SIZE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "bmp"];
const VIDEO_EXTENSIONS: [&str; 7] = ["mp4", "avi", "mov", "wmv", "flv", "webm", "mkv"];

/// Human-readable byte count: `1536 → "1.5 KB"`.
///
/// Scales by powers of 1024 and rounds to two decimals with trailing zeros
/// dropped. GB is the largest unit, so anything from 1 TiB up is still
/// reported in GB (`"1024 GB"`).
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut unit = 0;
    while unit + 1 < SIZE_UNITS.len() && bytes >= 1u64 << (10 * (unit + 1)) {
        unit += 1;
    }

    let scaled = bytes as f64 / (1u64 << (10 * unit)) as f64;
    let rounded = (scaled * 100.0).round() / 100.0;

    // f64 Display already omits trailing zeros ("1.5", "1", "1000")
    format!("{rounded} {}", SIZE_UNITS[unit])
}

/// Lowercased text after the last `.`, or `""` when there is none.
pub fn get_file_extension(filename: &str) -> String {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default()
}

pub fn is_image_file(filename: &str) -> bool {
    IMAGE_EXTENSIONS.contains(&get_file_extension(filename).as_str())
}

pub fn is_video_file(filename: &str) -> bool {
    VIDEO_EXTENSIONS.contains(&get_file_extension(filename).as_str())
}
