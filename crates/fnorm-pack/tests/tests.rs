use std::fs::File;
use std::io::{Cursor, Read};

use fnorm_name::NameOptions;
use fnorm_pack::{Disposition, PackOptions, Upload, prepare, write_archive};

fn entry_names(bytes: Vec<u8>) -> Vec<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("valid zip");
    (0..archive.len())
        .map(|i| archive.by_index(i).expect("entry").name().to_owned())
        .collect()
}

#[test]
fn decomposed_upload_batch_to_archive() {
    let uploads = vec![
        Upload::new("\u{1112}\u{1161}\u{11AB}\u{1100}\u{1173}\u{11AF}.txt", b"nfd".to_vec()),
        Upload::new("\u{D55C}\u{AE00}.txt", b"nfc".to_vec()),
        Upload::new("report: final?.docx", b"doc".to_vec()),
        Upload::new("CON.txt", b"con".to_vec()),
        Upload::new("skipped.txt", Vec::new()),
    ];

    let disposition = prepare(uploads, false, &NameOptions::default()).expect("prepare");
    assert!(disposition.is_archive());

    let download = disposition
        .into_download(&PackOptions::default())
        .expect("pack");
    assert_eq!(download.file_name, "normalized_files.zip");
    assert_eq!(download.content_type, "application/zip");

    assert_eq!(
        entry_names(download.bytes),
        [
            "\u{D55C}\u{AE00}.txt",
            "\u{D55C}\u{AE00} (1).txt",
            "report_ final_.docx",
            "_CON.txt",
        ]
    );
}

#[test]
fn forced_single_file_archive() {
    let uploads = vec![Upload::new("only.txt", b"payload".to_vec())];
    let disposition = prepare(uploads, true, &NameOptions::default()).expect("prepare");

    let Disposition::Archive { entries } = &disposition else {
        panic!("expected archive");
    };
    assert_eq!(entries.len(), 1);

    let options = PackOptions::default().archive_name("one.zip");
    let download = disposition.into_download(&options).expect("pack");
    assert_eq!(download.file_name, "one.zip");

    let mut archive = zip::ZipArchive::new(Cursor::new(download.bytes)).expect("valid zip");
    let mut content = String::new();
    archive
        .by_name("only.txt")
        .expect("entry")
        .read_to_string(&mut content)
        .expect("read");
    assert_eq!(content, "payload");
}

#[test]
fn archive_written_to_file() {
    let uploads = vec![
        Upload::new("a.txt", b"1".to_vec()),
        Upload::new("A.TXT", b"2".to_vec()),
    ];
    let Disposition::Archive { entries } =
        prepare(uploads, false, &NameOptions::default()).expect("prepare")
    else {
        panic!("expected archive");
    };

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("out.zip");
    let file = File::create(&path).expect("create");
    write_archive(&entries, file, &PackOptions::default()).expect("write");

    let bytes = std::fs::read(&path).expect("read");
    assert_eq!(entry_names(bytes), ["a.txt", "A (1).TXT"]);
}
