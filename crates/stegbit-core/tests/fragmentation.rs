use std::fs;

use tempfile::TempDir;

use stegbit_core::multi::{decode_multi, encode_multi, validate_encode_multi};
use stegbit_core::{Endian, MultiDecodeEntry, MultiEncodeEntry, StegOptions, StegStatus};

fn write_cover(dir: &TempDir, name: &str, fill: u8, len: usize) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, vec![fill; len]).unwrap();
    path
}

#[test]
fn twenty_seven_bytes_split_over_three_covers_come_back_in_order() {
    let dir = TempDir::new().unwrap();
    let payload_path = dir.path().join("payload.bin");
    let payload: Vec<u8> = (1..=27).collect();
    fs::write(&payload_path, &payload).unwrap();

    // three different covers, three different schemes
    let slices = [
        (5u64, StegOptions::default()),
        (
            12,
            StegOptions::new(3, 2, 4, 5, Endian::Little, 2, "").unwrap(),
        ),
        (10, StegOptions::new(0, 1, 3, 7, Endian::Big, 1, "").unwrap()),
    ];

    let entries: Vec<MultiEncodeEntry> = slices
        .iter()
        .enumerate()
        .map(|(i, (amount, options))| MultiEncodeEntry {
            cover_path: write_cover(&dir, &format!("cover{i}.bin"), 0x40 + i as u8, 4096),
            destination_path: dir.path().join(format!("stego{i}.bin")),
            data_amount: *amount,
            options: options.clone(),
        })
        .collect();

    for validation in validate_encode_multi(&entries).unwrap() {
        assert!(validation.is_sufficient());
    }

    assert_eq!(
        encode_multi(&entries, &payload_path).unwrap(),
        StegStatus::EncodingSuccessful
    );

    let decode_entries: Vec<MultiDecodeEntry> = entries
        .iter()
        .map(|entry| MultiDecodeEntry {
            encoded_path: entry.destination_path.clone(),
            options: entry.options.clone(),
        })
        .collect();

    let recovered_path = dir.path().join("recovered.bin");
    assert_eq!(
        decode_multi(&decode_entries, &recovered_path).unwrap(),
        StegStatus::DecodingSuccessful
    );
    assert_eq!(fs::read(&recovered_path).unwrap(), payload);
}

#[test]
fn decode_short_circuits_on_the_first_wrong_password() {
    let dir = TempDir::new().unwrap();
    let payload_path = dir.path().join("payload.bin");
    fs::write(&payload_path, vec![0xEE; 20]).unwrap();

    let keyed = StegOptions::new(0, 0, 1, 0, Endian::Big, 0, "first").unwrap();
    let open = StegOptions::default();

    let entries = vec![
        MultiEncodeEntry {
            cover_path: write_cover(&dir, "c0.bin", 0x10, 2048),
            destination_path: dir.path().join("s0.bin"),
            data_amount: 10,
            options: keyed.clone(),
        },
        MultiEncodeEntry {
            cover_path: write_cover(&dir, "c1.bin", 0x20, 2048),
            destination_path: dir.path().join("s1.bin"),
            data_amount: 10,
            options: open.clone(),
        },
    ];
    encode_multi(&entries, &payload_path).unwrap();

    // wrong password on the first fragment stops the whole run
    let wrong = StegOptions::new(0, 0, 1, 0, Endian::Big, 0, "wrong").unwrap();
    let decode_entries = vec![
        MultiDecodeEntry {
            encoded_path: dir.path().join("s0.bin"),
            options: wrong,
        },
        MultiDecodeEntry {
            encoded_path: dir.path().join("s1.bin"),
            options: open,
        },
    ];

    let recovered_path = dir.path().join("recovered.bin");
    assert_eq!(
        decode_multi(&decode_entries, &recovered_path).unwrap(),
        StegStatus::InvalidPassword
    );
}
