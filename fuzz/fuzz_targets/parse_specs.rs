#![no_main]
use libfuzzer_sys::fuzz_target;

use laptop_price::features::{parse_cpu, parse_screen, parse_storage, split_gpu};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    let cpu = parse_cpu(&text);
    assert_eq!(cpu.brand.is_some(), cpu.clock_ghz.is_some());

    let storage = parse_storage(&text);
    assert_eq!(storage.disk_count == 0, storage.total_gb == 0.0);
    let buckets =
        storage.ssd_gb + storage.hdd_gb + storage.flash_gb + storage.hybrid_gb + storage.other_gb;
    assert_eq!(storage.total_gb.to_bits(), buckets.to_bits());

    if let Some(d) = parse_screen(&text).diagonal_pixels {
        assert!(d >= 0.0);
    }
    let _ = split_gpu(&text);
});
