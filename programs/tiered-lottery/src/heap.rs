//! Program heap.
//!
//! `entrypoint!` installs a bump allocator over the default 32 KiB frame
//! unless the `custom-heap` feature is set. With it, the allocator spans
//! `HEAP_FRAME_BYTES`, and every transaction calling the program must request
//! that frame with `ComputeBudgetInstruction::request_heap_frame`.

#[cfg(all(
    feature = "custom-heap",
    not(feature = "no-entrypoint"),
    target_os = "solana"
))]
#[global_allocator]
static ALLOCATOR: anchor_lang::solana_program::entrypoint::BumpAllocator =
    anchor_lang::solana_program::entrypoint::BumpAllocator {
        start: anchor_lang::solana_program::entrypoint::HEAP_START_ADDRESS as usize,
        len: crate::constants::HEAP_FRAME_BYTES,
    };
