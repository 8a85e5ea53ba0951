use super::*;

#[test]
fn zero_bytes() {
    assert_eq!(format_file_size(0), "0 Bytes");
}

#[test]
fn stays_in_bytes_below_one_kilobyte() {
    assert_eq!(format_file_size(1), "1 Bytes");
    assert_eq!(format_file_size(1023), "1023 Bytes");
}

#[test]
fn drops_trailing_zeros() {
    assert_eq!(format_file_size(1024), "1 KB");
    assert_eq!(format_file_size(1536), "1.5 KB");
    assert_eq!(format_file_size(5 * 1024 * 1024), "5 MB");
}

#[test]
fn rounds_to_two_decimals() {
    // 1234 / 1024 = 1.2050...
    assert_eq!(format_file_size(1234), "1.21 KB");
    assert_eq!(format_file_size(3 * 1024 * 1024 * 1024 / 2), "1.5 GB");
}

#[test]
fn caps_at_gigabytes() {
    assert_eq!(format_file_size(2048 * 1024 * 1024 * 1024), "2048 GB");
}
