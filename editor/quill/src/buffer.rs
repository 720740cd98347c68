//! Reading file contents into arena storage.

use std::io::{self, Read};

use quill_arena::{Arena, ArenaPtr, RegionBackend};

/// Initial buffer size for [`load_into_arena`]. The buffer doubles whenever
/// it fills.
pub const INITIAL_BUFFER_SIZE: usize = 4 * 1024;

/// Read `reader` to EOF into one contiguous arena allocation.
///
/// The buffer grows through [`Arena::reallocate`], so earlier partial
/// buffers stay behind in the arena until it is reset. The returned handle
/// covers exactly the bytes read.
#[tracing::instrument(level = "debug", skip_all)]
pub fn load_into_arena<R, B>(reader: &mut R, arena: &mut Arena<B>) -> io::Result<ArenaPtr>
where
    R: Read + ?Sized,
    B: RegionBackend,
{
    let mut capacity = INITIAL_BUFFER_SIZE;
    let mut buffer = arena.allocate(capacity);
    let mut len = 0;

    loop {
        if len == capacity {
            let grown = capacity * 2;
            buffer = arena.reallocate(buffer, capacity, grown);
            tracing::trace!(from = capacity, to = grown, "buffer grown");
            capacity = grown;
        }
        match reader.read(&mut arena.bytes_mut(buffer)[len..]) {
            Ok(0) => break,
            Ok(n) => len += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }

    tracing::debug!(len, capacity, "buffer loaded");
    Ok(buffer.prefix(len))
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
