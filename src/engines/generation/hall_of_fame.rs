use crate::engines::generation::genome::Genome;
use std::collections::HashSet;

/// A candidate admitted to the hall of fame, together with the output it
/// produced when it was evaluated.
#[derive(Clone, Debug)]
pub struct EliteCandidate {
    pub code: Genome,
    pub fitness: u64,
    pub output: i64,
    pub canonical_string: String, // For deduplication
}

/// Size-bounded archive of the best candidates seen across all
/// generations, deduplicated by code sequence. `best()` is the best-ever
/// candidate: it is only displaced by a strictly lower fitness, so its
/// fitness never increases over the life of a run.
pub struct HallOfFame {
    elites: Vec<EliteCandidate>,
    max_size: usize,
    seen_signatures: HashSet<String>,
}

impl HallOfFame {
    pub fn new(max_size: usize) -> Self {
        Self {
            elites: Vec::new(),
            max_size,
            seen_signatures: HashSet::new(),
        }
    }

    /// Attempt to add a candidate. Duplicates are rejected; otherwise the
    /// archive is re-ranked by fitness and trimmed to its bound.
    pub fn try_add(&mut self, elite: EliteCandidate) -> bool {
        if self.seen_signatures.contains(&elite.canonical_string) {
            return false;
        }

        self.seen_signatures.insert(elite.canonical_string.clone());
        self.elites.push(elite);
        self.sort_and_trim();

        true
    }

    fn sort_and_trim(&mut self) {
        // Stable sort: on equal fitness the earlier admission keeps rank 0.
        self.elites.sort_by_key(|e| e.fitness);

        while self.elites.len() > self.max_size {
            if let Some(removed) = self.elites.pop() {
                self.seen_signatures.remove(&removed.canonical_string);
            }
        }
    }

    /// The best-ever candidate, if any has been admitted.
    pub fn best(&self) -> Option<&EliteCandidate> {
        self.elites.first()
    }

    pub fn get_all(&self) -> &[EliteCandidate] {
        &self.elites
    }

    pub fn len(&self) -> usize {
        self.elites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elites.is_empty()
    }
}

/// Generate canonical string for deduplication
pub fn get_canonical_code_string(code: &Genome) -> String {
    serde_json::to_string(code).unwrap_or_else(|_| String::new())
}
