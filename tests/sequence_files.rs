use indicatif::ProgressBar;
use seqsketch::commands::dist::distance_rows;
use seqsketch::commands::sketch::{sketch_file, sketch_files};
use seqsketch::config::Settings;
use seqsketch::sequence_processor::{FastqReader, SequenceReader, SketchCollector};
use seqsketch::Fingerprint;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const READ_A: &str = "ATGCGATCGATCGATCGATCGATCGATCGATCGATCGATCGATCGATCGATCGATCGATCGA";
const READ_B: &str = "TTGACCATGGCATTAGCCGATAGGCTTACCGATTGCAAGGCTAGCCTAGGATCCAGT";

fn settings(threads: usize) -> Settings {
    Settings {
        kmer_size: 17,
        sketch_size: 10,
        threads,
    }
}

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn fastq(records: &[(&str, &str)]) -> String {
    records
        .iter()
        .map(|(id, seq)| format!("@{}\n{}\n+\n{}\n", id, seq, "I".repeat(seq.len())))
        .collect()
}

fn expected_fingerprint(reads: &[&str]) -> Fingerprint {
    let mut fp = Fingerprint::new(17, 10).unwrap();
    for read in reads {
        fp.sketch(read.as_bytes());
    }
    fp
}

#[test]
fn fasta_records_are_sketched_together() {
    let dir = TempDir::new().unwrap();
    let content = format!(
        ">a description\n{}\n{}\n>b\n{}\n>short\nACGT\n",
        &READ_A[..30],
        &READ_A[30..],
        READ_B.to_lowercase()
    );
    let path = write_file(dir.path(), "sample.fasta", &content);

    let sketched = sketch_file(&path, &settings(1), &ProgressBar::hidden()).unwrap();
    assert_eq!(sketched.stats.processed, 2);
    assert_eq!(sketched.stats.too_short, 1);
    assert_eq!(sketched.fingerprint, expected_fingerprint(&[READ_A, READ_B]));
}

#[test]
fn fastq_reader_feeds_collector() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "reads.fq",
        &fastq(&[("r1", READ_A), ("r2", "ACGTACGT"), ("r3", READ_B)]),
    );

    let mut collector = SketchCollector::new(Fingerprint::new(17, 10).unwrap());
    let mut reader = FastqReader::new(&path).unwrap();
    let stats = reader
        .read_sequences(&mut collector, &ProgressBar::hidden())
        .unwrap();

    assert_eq!(stats.processed, 2);
    assert_eq!(stats.too_short, 1);
    assert_eq!(collector.bases(), (READ_A.len() + READ_B.len()) as u64);
    assert_eq!(collector.into_fingerprint(), expected_fingerprint(&[READ_A, READ_B]));
}

#[test]
fn gzipped_fastq_matches_plain_fasta() {
    let dir = TempDir::new().unwrap();
    let gz_path = dir.path().join("reads.fastq.gz");
    {
        let file = fs::File::create(&gz_path).unwrap();
        let mut writer = niffler::get_writer(
            Box::new(file),
            niffler::compression::Format::Gzip,
            niffler::Level::One,
        )
        .unwrap();
        writer
            .write_all(fastq(&[("r1", READ_A)]).as_bytes())
            .unwrap();
    }
    let fa_path = write_file(dir.path(), "genome.fa", &format!(">g\n{}\n", READ_A));

    let files = sketch_files(&[gz_path, fa_path], &settings(2)).unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0].fingerprint, files[1].fingerprint);
    assert_eq!(files[0].fingerprint.hexdigest(), files[1].fingerprint.hexdigest());

    let rows = distance_rows(&files, false).unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row.distance == 0.0));
}

#[test]
fn unrelated_files_are_distant() {
    let dir = TempDir::new().unwrap();
    let a = write_file(dir.path(), "a.fa", &format!(">a\n{}\n", READ_A));
    let b = write_file(dir.path(), "b.fa", &format!(">b\n{}\n", READ_B));

    let files = sketch_files(&[a, b], &settings(1)).unwrap();
    let rows = distance_rows(&files, true).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].distance, 1.0);
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "reads.sam", "@HD\tVN:1.6\n");
    let err = sketch_files(&[path], &settings(1)).unwrap_err();
    assert!(format!("{:#}", err).contains("Unsupported file format"));
}

#[test]
fn missing_file_names_the_path() {
    let dir = TempDir::new().unwrap();
    let present = write_file(dir.path(), "a.fa", &format!(">a\n{}\n", READ_A));
    let missing = dir.path().join("missing.fa");

    let err = sketch_files(&[present, missing], &settings(2)).unwrap_err();
    assert!(format!("{:#}", err).contains("missing.fa"));
}

#[test]
fn truncated_fastq_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "bad.fq", &format!("@r1\n{}\n+\nIII\n", READ_A));
    assert!(sketch_files(&[path], &settings(1)).is_err());
}

#[test]
fn shared_progress_counts_records_without_per_file_messages() {
    let dir = TempDir::new().unwrap();
    let a = write_file(dir.path(), "a.fa", &format!(">a\n{}\n>b\n{}\n", READ_A, READ_B));
    let b = write_file(dir.path(), "b.fq", &fastq(&[("r1", READ_B)]));

    let progress = ProgressBar::hidden();
    progress.set_message("Sketching 2 files");
    for path in [&a, &b] {
        sketch_file(path, &settings(1), &progress).unwrap();
    }

    assert_eq!(progress.message(), "Sketching 2 files");
    assert_eq!(progress.position(), 3);
}
