//! Greedy merging of small parts into chunks, with overlap carry-over

use super::RecursiveSplitter;
use std::collections::VecDeque;

impl RecursiveSplitter {
    /// Merge parts that each fit in a chunk into as few chunks as possible.
    ///
    /// After a chunk is flushed, its trailing parts are carried into the next
    /// chunk while their total stays within `overlap_size` and the incoming
    /// part still fits.
    pub(super) fn merge_parts(&self, parts: &[&str], separator: &str) -> Vec<String> {
        let separator_len = self.measure(separator);
        let mut chunks = Vec::new();
        let mut current: VecDeque<(&str, usize)> = VecDeque::new();
        let mut total = 0usize;

        for &part in parts {
            let len = self.measure(part);

            if !current.is_empty() && total + len + separator_len > self.chunk_size {
                self.flush(&current, separator, total, &mut chunks);

                while let Some(&(_, first_len)) = current.front() {
                    let joiner = if current.is_empty() { 0 } else { separator_len };
                    let overflows = total + len + joiner > self.chunk_size;
                    if total <= self.overlap_size && !overflows {
                        break;
                    }
                    let trailing_joiner = if current.len() > 1 { separator_len } else { 0 };
                    total = total.saturating_sub(first_len + trailing_joiner);
                    current.pop_front();
                }
            }

            if !current.is_empty() {
                total += separator_len;
            }
            total += len;
            current.push_back((part, len));
        }

        self.flush(&current, separator, total, &mut chunks);
        chunks
    }

    fn flush(
        &self,
        current: &VecDeque<(&str, usize)>,
        separator: &str,
        total: usize,
        chunks: &mut Vec<String>,
    ) {
        if current.is_empty() {
            return;
        }

        let chunk = current
            .iter()
            .map(|&(part, _)| part)
            .collect::<Vec<_>>()
            .join(separator);

        if chunk.is_empty() {
            return;
        }

        if total > self.chunk_size {
            log::warn!(
                "created a chunk of size {}, which is longer than the specified {}",
                total,
                self.chunk_size
            );
        }

        chunks.push(chunk);
    }
}
