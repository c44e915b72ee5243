//! Tests for outbound chunking and chunk batch helpers.

use rstest::rstest;

use crate::{Chunk, ChunkBatch, ChunkFlag, ChunkSize, Chunker, make_chunks};

fn assert_chunk(batch: &ChunkBatch, index: usize, flag: ChunkFlag, payload: &[u8]) {
    let chunk = batch
        .chunks()
        .get(index)
        .expect("chunk missing at requested index");
    assert_eq!(chunk.header().flag(), flag);
    assert_eq!(chunk.payload(), payload);
}

#[test]
fn chunker_splits_payload_into_multiple_chunks() {
    let chunker = Chunker::new(ChunkSize::new(3));
    let payload: Vec<u8> = (0..8).collect();
    let batch = chunker.chunk(&payload);

    assert_eq!(batch.len(), 3);
    assert!(batch.is_split());
    assert_chunk(&batch, 0, ChunkFlag::First, &[0, 1, 2]);
    assert_chunk(&batch, 1, ChunkFlag::Middle, &[3, 4, 5]);
    assert_chunk(&batch, 2, ChunkFlag::Last, &[6, 7]);
}

#[test]
fn chunker_handles_empty_payload() {
    let batch = Chunker::new(ChunkSize::new(8)).chunk(&[]);

    assert_eq!(batch.len(), 1);
    assert!(!batch.is_split());
    assert_chunk(&batch, 0, ChunkFlag::Only, &[]);
}

#[test]
fn chunker_tags_fitting_payload_as_only() {
    let batch = Chunker::new(ChunkSize::new(8)).chunk(&[1, 2, 3]);

    assert_eq!(batch.len(), 1);
    assert!(!batch.is_split());
    assert_chunk(&batch, 0, ChunkFlag::Only, &[1, 2, 3]);
}

#[rstest]
#[case(25, 10, 3)]
#[case(30, 10, 3)]
#[case(31, 10, 4)]
#[case(10, 10, 1)]
#[case(1, 1, 1)]
#[case(3, 1, 3)]
fn chunk_count_is_payload_ceiling(
    #[case] payload_len: usize,
    #[case] chunk_size: usize,
    #[case] expected: usize,
) {
    let payload = vec![0xab_u8; payload_len];
    let batch = Chunker::new(ChunkSize::new(chunk_size)).chunk(&payload);
    assert_eq!(batch.len(), expected);
    assert_eq!(batch.len(), payload_len.div_ceil(chunk_size));
}

#[test]
fn chunk_flags_delimit_the_message() {
    let payload = vec![7_u8; 50];
    let batch = Chunker::new(ChunkSize::new(10)).chunk(&payload);

    let flags: Vec<ChunkFlag> = batch
        .chunks()
        .iter()
        .map(|chunk| chunk.header().flag())
        .collect();
    assert_eq!(flags.first(), Some(&ChunkFlag::First));
    assert_eq!(flags.last(), Some(&ChunkFlag::Last));
    assert!(
        flags[1..flags.len() - 1]
            .iter()
            .all(|flag| *flag == ChunkFlag::Middle)
    );
}

#[test]
fn concatenated_chunk_payloads_reproduce_the_input() {
    let payload: Vec<u8> = (0..=255).collect();
    let batch = Chunker::new(ChunkSize::new(7)).chunk(&payload);

    let mut rebuilt = Vec::new();
    for chunk in batch {
        rebuilt.extend_from_slice(chunk.payload());
    }
    assert_eq!(rebuilt, payload);
}

#[test]
fn out_of_range_sizes_clamp_to_the_maximum() {
    let payload = vec![0x55_u8; 20_000];
    let clamped_low = make_chunks(&payload, 0);
    let clamped_high = make_chunks(&payload, 100_000);
    let reference = make_chunks(&payload, 8191);

    assert_eq!(clamped_low, reference);
    assert_eq!(clamped_high, reference);
    assert_eq!(reference.len(), 3);
}

#[test]
fn worked_example_produces_exact_wire_bytes() {
    // 25 bytes of 0x41 split at 10 gives (F,10) (M,10) (L,5).
    let payload = vec![0x41_u8; 25];
    let chunks = make_chunks(&payload, 10);

    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[0], [&[0x4a_u8][..], &payload[..10]].concat());
    assert_eq!(chunks[1], [&[0x0a_u8][..], &payload[..10]].concat());
    assert_eq!(chunks[2], [&[0x85_u8][..], &payload[..5]].concat());
}

#[test]
fn long_chunks_use_the_extended_header_form() {
    let payload = vec![9_u8; 40];
    let batch = Chunker::new(ChunkSize::new(40)).chunk(&payload);

    let chunk = batch.chunks().first().expect("one chunk");
    assert_eq!(chunk.header().encoded_len(), 2);
    let wire = chunk.encode();
    assert_eq!(wire.len(), 2 + 40);
    assert_eq!(wire[0], 0xc0 | 0x20);
    assert_eq!(wire[1], 40);
}

#[test]
fn chunk_into_parts_round_trips() {
    let chunk = Chunk::new(ChunkFlag::Last, vec![1, 2, 3]);
    let (header, payload) = chunk.into_parts();
    assert_eq!(header.flag(), ChunkFlag::Last);
    assert_eq!(header.len(), 3);
    assert_eq!(payload, vec![1, 2, 3]);
}
