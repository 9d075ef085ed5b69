//! Tests for sending-side frame splitting.

use crate::frame::{FrameEncoder, FrameError, FrameHeader};

#[test]
fn budget_must_fit_header_and_payload() {
    let err = FrameEncoder::for_frame_budget(FrameHeader::WIRE_SIZE)
        .expect_err("budget equal to the header leaves no payload room");
    assert_eq!(
        err,
        FrameError::BudgetTooSmall {
            budget: FrameHeader::WIRE_SIZE,
        }
    );
    assert!(FrameEncoder::for_frame_budget(FrameHeader::WIRE_SIZE + 1).is_ok());
}

#[test]
fn small_payload_fits_one_single_flag_frame() {
    let encoder = FrameEncoder::for_frame_budget(FrameHeader::WIRE_SIZE + 8).expect("budget");
    let frames = encoder.encode(&[1, 2, 3]).expect("encode");
    assert_eq!(frames.len(), 1);

    let (header, slice) = FrameHeader::parse(&frames[0]).expect("parse");
    assert!(!header.is_multipart());
    assert_eq!(header.total().get(), 1);
    assert_eq!(header.payload_len(), 3);
    assert_eq!(slice, &[1, 2, 3]);
}

#[test]
fn large_payload_splits_with_sequential_indices() {
    let encoder = FrameEncoder::for_frame_budget(FrameHeader::WIRE_SIZE + 4).expect("budget");
    let payload: Vec<u8> = (0_u8..10).collect();
    let frames = encoder.encode(&payload).expect("encode");
    assert_eq!(frames.len(), 3);

    let mut rebuilt = Vec::new();
    for (position, raw) in frames.iter().enumerate() {
        let (header, slice) = FrameHeader::parse(raw).expect("parse");
        assert!(header.is_multipart());
        assert_eq!(usize::from(header.index().get()), position);
        assert_eq!(header.total().get(), 3);
        assert_eq!(header.payload_len(), 10);
        rebuilt.extend_from_slice(slice);
    }
    assert_eq!(rebuilt, payload);

    let (_, last) = FrameHeader::parse(&frames[2]).expect("parse");
    assert_eq!(last.len(), 2, "last slice carries the remainder");
}

#[test]
fn empty_payload_produces_one_empty_frame() {
    let encoder = FrameEncoder::for_frame_budget(FrameHeader::WIRE_SIZE + 4).expect("budget");
    let frames = encoder.encode(&[]).expect("encode");
    assert_eq!(frames.len(), 1);

    let (header, slice) = FrameHeader::parse(&frames[0]).expect("parse");
    assert_eq!(header.total().get(), 1);
    assert_eq!(header.payload_len(), 0);
    assert!(slice.is_empty());
}

#[test]
fn rejects_payloads_needing_too_many_frames() {
    let encoder = FrameEncoder::for_frame_budget(FrameHeader::WIRE_SIZE + 1).expect("budget");
    let payload = vec![0_u8; usize::from(u16::MAX) + 1];
    let err = encoder.encode(&payload).expect_err("frame count must overflow");
    assert_eq!(
        err,
        FrameError::FrameCountOverflow {
            required: usize::from(u16::MAX) + 1,
        }
    );
}
