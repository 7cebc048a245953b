use log::debug;

///////////////////////////////
/// Anything that can answer "is this encoded window a primer, and which one"
pub trait KmerLookup {
    fn lookup(&self, encoding: u64) -> Option<&str>;
}

///////////////////////////////
/// A single primer encoding. Paired mode looks for one primer per mate, so there is no need for a tree
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SinglePrimer {
    pub encoding: u64,
    pub id: String,
}
impl SinglePrimer {
    pub fn new(encoding: u64, id: &str) -> Self {
        Self {
            encoding,
            id: id.to_string(),
        }
    }
}
impl KmerLookup for SinglePrimer {
    #[inline(always)]
    fn lookup(&self, encoding: u64) -> Option<&str> {
        if encoding == self.encoding {
            Some(&self.id)
        } else {
            None
        }
    }
}

#[derive(Clone, Debug)]
pub struct PrimerNode {
    pub value: u64,
    pub id: String,
    bigger: Option<usize>,
    smaller: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// Key already present; the earlier id stays and the new one is dropped
    Duplicate { existing_id: String },
}

///////////////////////////////
/// Unbalanced binary search tree over primer encodings. Nodes live in an arena and link by index.
/// Shape depends only on insertion order; sorted input degrades lookups to linear time
#[derive(Clone, Debug, Default)]
pub struct PrimerIndex {
    nodes: Vec<PrimerNode>,
}
impl PrimerIndex {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    ///////////////////////////////
    /// Descend to the first free child slot and attach a new node there
    pub fn insert(&mut self, key: u64, id: &str) -> InsertOutcome {
        let new_index = self.nodes.len();
        if self.nodes.is_empty() {
            self.nodes.push(PrimerNode::leaf(key, id));
            return InsertOutcome::Inserted;
        }

        let mut current = 0;

        loop {
            let node = &mut self.nodes[current];
            let slot = if key > node.value {
                &mut node.bigger
            } else if key < node.value {
                &mut node.smaller
            } else {
                debug!(
                    "Primer {} has the same encoding as {}; keeping {}",
                    id, node.id, node.id
                );
                return InsertOutcome::Duplicate {
                    existing_id: node.id.clone(),
                };
            };

            match *slot {
                Some(next) => current = next,
                None => {
                    *slot = Some(new_index);
                    self.nodes.push(PrimerNode::leaf(key, id));
                    return InsertOutcome::Inserted;
                }
            }
        }
    }

    ///////////////////////////////
    /// Find the node holding this key, if any
    pub fn find(&self, key: u64) -> Option<&PrimerNode> {
        let mut current = if self.nodes.is_empty() { None } else { Some(0) };
        while let Some(index) = current {
            let node = &self.nodes[index];
            if key > node.value {
                current = node.bigger;
            } else if key < node.value {
                current = node.smaller;
            } else {
                return Some(node);
            }
        }
        None
    }

    ///////////////////////////////
    /// Number of nodes on the longest root-to-leaf path
    pub fn depth(&self) -> usize {
        if self.nodes.is_empty() {
            return 0;
        }
        let mut deepest = 0;
        let mut stack = vec![(0usize, 1usize)];
        while let Some((index, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            let node = &self.nodes[index];
            for child in [node.bigger, node.smaller].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        deepest
    }
}

impl PrimerNode {
    fn leaf(value: u64, id: &str) -> Self {
        Self {
            value,
            id: id.to_string(),
            bigger: None,
            smaller: None,
        }
    }
}

impl KmerLookup for PrimerIndex {
    #[inline(always)]
    fn lookup(&self, encoding: u64) -> Option<&str> {
        self.find(encoding).map(|node| node.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(keys: &[u64]) -> PrimerIndex {
        let mut index = PrimerIndex::new();
        for k in keys {
            assert_eq!(index.insert(*k, &format!("NAME: {}", k)), InsertOutcome::Inserted);
        }
        index
    }

    #[test]
    fn test_find_inserted_keys() {
        let index = build(&[10, 12, 11, 9, 5, 8, 14, 13]);
        for k in [10, 12, 11, 9, 5, 8, 14, 13] {
            let node = index.find(k).expect("key should be present");
            assert_eq!(node.id, format!("NAME: {}", k));
            assert_eq!(node.value, k);
        }
        for k in [17, 2, 99] {
            assert!(index.find(k).is_none());
        }
        assert_eq!(index.len(), 8);
    }

    #[test]
    fn test_empty_index() {
        let index = PrimerIndex::new();
        assert!(index.is_empty());
        assert!(index.find(0).is_none());
        assert_eq!(index.depth(), 0);
    }

    #[test]
    fn test_duplicate_first_wins() {
        let mut index = PrimerIndex::new();
        index.insert(7, "first");
        index.insert(3, "other");
        let outcome = index.insert(7, "second");
        assert_eq!(
            outcome,
            InsertOutcome::Duplicate {
                existing_id: "first".to_string()
            }
        );
        assert_eq!(index.lookup(7), Some("first"));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_sorted_insertion_degrades_to_list() {
        let index = build(&[5, 8, 9, 10, 11, 12, 13, 14]);
        assert_eq!(index.depth(), 8);
        let index = build(&[10, 12, 11, 9, 5, 8, 14, 13]);
        assert_eq!(index.depth(), 4);
    }

    #[test]
    fn test_single_primer_lookup() {
        let primer = SinglePrimer::new(42, "R1");
        assert_eq!(primer.lookup(42), Some("R1"));
        assert_eq!(primer.lookup(41), None);
    }
}
