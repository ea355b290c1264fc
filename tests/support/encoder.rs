// Test-only `-lz5-` encoder.
//
// Greedy longest-match search over the whole 4 KiB ring buffer, simulating
// the decoder's dictionary exactly (filler included), so decoding its output
// must reproduce the input byte for byte.  It is slow (every ring position
// is tried at every input position) and only meant for test inputs.

#![allow(dead_code)]

const RING: usize = 4096;
const MASK: usize = RING - 1;
const START: usize = RING - 18;
const MIN_MATCH: usize = 3;
const MAX_MATCH: usize = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Literal(u8),
    Copy { start: usize, len: usize },
}

/// Length of the match for a copy from ring position `start` when the next
/// output byte lands at `pos`.  Bytes the copy itself has already written
/// are taken from `input`, as the decoder would see them.
fn match_len(ring: &[u8; RING], pos: usize, start: usize, input: &[u8]) -> usize {
    let limit = input.len().min(MAX_MATCH);
    let mut k = 0;
    while k < limit {
        let idx = (start + k) & MASK;
        let written = (idx + RING - pos) & MASK;
        let b = if written < k { input[written] } else { ring[idx] };
        if b != input[k] {
            break;
        }
        k += 1;
    }
    k
}

/// Splits `input` into literal and copy commands.
pub fn commands(input: &[u8]) -> Vec<Command> {
    let mut ring = [b' '; RING];
    let mut pos = START;
    let mut out = Vec::new();
    let mut i = 0;

    while i < input.len() {
        let rest = &input[i..];
        let mut best = (0usize, 0usize);
        for start in 0..RING {
            let len = match_len(&ring, pos, start, rest);
            if len > best.1 {
                best = (start, len);
                if len == MAX_MATCH.min(rest.len()) {
                    break;
                }
            }
        }

        let taken = if best.1 >= MIN_MATCH {
            out.push(Command::Copy { start: best.0, len: best.1 });
            best.1
        } else {
            out.push(Command::Literal(rest[0]));
            1
        };
        for &b in &rest[..taken] {
            ring[pos] = b;
            pos = (pos + 1) & MASK;
        }
        i += taken;
    }
    out
}

/// Serializes commands into runs: a bitmap byte (bit set = literal, low bit
/// first) followed by up to eight commands.  The final run simply stops
/// after its last command.
pub fn serialize(cmds: &[Command]) -> Vec<u8> {
    let mut out = Vec::new();
    for run in cmds.chunks(8) {
        let mut bitmap = 0u8;
        for (bit, cmd) in run.iter().enumerate() {
            if let Command::Literal(_) = cmd {
                bitmap |= 1 << bit;
            }
        }
        out.push(bitmap);
        for cmd in run {
            match *cmd {
                Command::Literal(b) => out.push(b),
                Command::Copy { start, len } => {
                    out.push((start & 0xFF) as u8);
                    out.push((((start >> 8) << 4) | (len - MIN_MATCH)) as u8);
                }
            }
        }
    }
    out
}

/// Encodes `input` as a `-lz5-` stream.
pub fn encode(input: &[u8]) -> Vec<u8> {
    serialize(&commands(input))
}
