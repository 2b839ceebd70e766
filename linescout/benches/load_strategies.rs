#![allow(unused_must_use)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linescout::lines::{self, LineSpan};
use linescout::sniff::{self, Classification, SNIFF_LEN};
use linescout::{loader, ScratchBuffer};
use memmap2::Mmap;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::PathBuf;
use tempfile::tempdir;

fn create_corpus(
    dir: &tempfile::TempDir,
    file_count: usize,
    lines_per_file: usize,
) -> std::io::Result<Vec<PathBuf>> {
    let mut paths = Vec::with_capacity(file_count);
    for i in 0..file_count {
        let path = dir.path().join(format!("src_{}.rs", i));
        let mut file = File::create(&path)?;
        for j in 0..lines_per_file {
            writeln!(file, "fn item_{}_{}() {{ compute({}, {}); }}", i, j, i, j)?;
        }
        paths.push(path);
    }
    Ok(paths)
}

// Production path: fstat size, reused scratch storage, sniff-gated
// two-step read.
fn load_scratch(paths: &[PathBuf], scratch: &mut ScratchBuffer) -> usize {
    let mut total = 0;
    for path in paths {
        total += loader::load(path, scratch).line_count();
    }
    total
}

// Fresh allocation per file via fs::read.
fn load_fs_read(paths: &[PathBuf]) -> usize {
    let mut total = 0;
    for path in paths {
        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(_) => continue,
        };
        if data.is_empty() {
            continue;
        }
        let window = data.len().min(SNIFF_LEN);
        if sniff::classify(&data[..window]) == Classification::Binary {
            continue;
        }
        total += lines::index(&data).len();
    }
    total
}

// Buffered stream into a reused Vec.
fn load_buffered(paths: &[PathBuf], buf: &mut Vec<u8>) -> usize {
    let mut total = 0;
    for path in paths {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(_) => continue,
        };
        buf.clear();
        if BufReader::new(file).read_to_end(buf).is_err() || buf.is_empty() {
            continue;
        }
        let window = buf.len().min(SNIFF_LEN);
        if sniff::classify(&buf[..window]) == Classification::Binary {
            continue;
        }
        total += lines::index(buf).len();
    }
    total
}

// Memory mapping instead of reading.
fn load_mmap(paths: &[PathBuf]) -> usize {
    let mut total = 0;
    for path in paths {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(_) => continue,
        };
        let mmap = match unsafe { Mmap::map(&file) } {
            Ok(mmap) => mmap,
            Err(_) => continue,
        };
        if mmap.is_empty() {
            continue;
        }
        let window = mmap.len().min(SNIFF_LEN);
        if sniff::classify(&mmap[..window]) == Classification::Binary {
            continue;
        }
        total += lines::index(&mmap).len();
    }
    total
}

// Scratch storage but one whole-file read, classifying afterwards.
fn load_scratch_single_read(paths: &[PathBuf], scratch: &mut ScratchBuffer) -> usize {
    let mut total = 0;
    for path in paths {
        let mut file = match File::open(path) {
            Ok(file) => file,
            Err(_) => continue,
        };
        let size = match file.metadata() {
            Ok(metadata) => metadata.len() as usize,
            Err(_) => continue,
        };
        if size == 0 {
            continue;
        }
        let buf = scratch.grow(size);
        if file.read_exact(&mut buf[..]).is_err() {
            continue;
        }
        let window = size.min(SNIFF_LEN);
        if sniff::classify(&buf[..window]) == Classification::Binary {
            continue;
        }
        total += lines::index(buf).len();
    }
    total
}

// The per-byte scan the memchr index replaced.
fn index_byte_loop(data: &[u8]) -> Vec<LineSpan> {
    let mut spans = Vec::with_capacity(128);
    let mut start = 0;
    for (pos, byte) in data.iter().enumerate() {
        if *byte == b'\n' {
            spans.push(LineSpan {
                offset: start,
                len: pos - start,
            });
            start = pos + 1;
        }
    }
    if start != data.len() {
        spans.push(LineSpan {
            offset: start,
            len: data.len() - start,
        });
    }
    spans
}

fn bench_load_strategies(c: &mut Criterion) -> std::io::Result<()> {
    let dir = tempdir().unwrap();
    let paths = create_corpus(&dir, 64, 200)?;

    let mut group = c.benchmark_group("File Loading");

    group.bench_function("scratch_two_read", |b| {
        let mut scratch = ScratchBuffer::new();
        b.iter(|| black_box(load_scratch(&paths, &mut scratch)));
    });

    group.bench_function("fs_read", |b| {
        b.iter(|| black_box(load_fs_read(&paths)));
    });

    group.bench_function("buffered_reader", |b| {
        let mut buf = Vec::new();
        b.iter(|| black_box(load_buffered(&paths, &mut buf)));
    });

    group.bench_function("mmap", |b| {
        b.iter(|| black_box(load_mmap(&paths)));
    });

    group.bench_function("scratch_single_read", |b| {
        let mut scratch = ScratchBuffer::new();
        b.iter(|| black_box(load_scratch_single_read(&paths, &mut scratch)));
    });

    group.finish();
    Ok(())
}

fn bench_line_indexing(c: &mut Criterion) {
    let mut data = Vec::new();
    for i in 0..20_000 {
        data.extend_from_slice(format!("line {} with typical source width padding\n", i).as_bytes());
    }

    let mut group = c.benchmark_group("Line Indexing");

    group.bench_function("memchr_scan", |b| {
        b.iter(|| black_box(lines::index(black_box(&data)).len()));
    });

    group.bench_function("byte_loop", |b| {
        b.iter(|| black_box(index_byte_loop(black_box(&data)).len()));
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = bench_load_strategies, bench_line_indexing
}

criterion_main!(benches);
