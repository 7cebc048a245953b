use crate::runtime::Error;

////////////////
/// Classic string hash, h = c + 31*h. Reduce modulo the table size to get a bucket
pub fn hash(s: &[u8]) -> u32 {
    s.iter()
        .fold(0u32, |h, &c| u32::from(c).wrapping_add(h.wrapping_mul(31)))
}

///////////////////////////////
/// What we remember of an R1 read between passes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct R1ReadEntry {
    pub id: Vec<u8>,
    /// None if no primer was found
    pub trim: Option<usize>,
    next: Option<usize>,
}

///////////////////////////////
/// Fixed-size hash table of R1 reads, chained on collision. Entries live in an arena;
/// buckets and chains hold indices into it. The table is never resized
#[derive(Debug)]
pub struct ReadTable {
    buckets: Vec<Option<usize>>,
    entries: Vec<R1ReadEntry>,
}
impl ReadTable {
    pub fn with_buckets(num_buckets: usize) -> Result<ReadTable, Error> {
        if num_buckets == 0 {
            return Err(Error::table_allocation(num_buckets));
        }
        let mut buckets = Vec::new();
        buckets
            .try_reserve_exact(num_buckets)
            .map_err(|_| Error::table_allocation(num_buckets))?;
        buckets.resize(num_buckets, None);
        Ok(ReadTable {
            buckets,
            entries: Vec::new(),
        })
    }

    #[inline(always)]
    fn bucket_of(&self, id: &[u8]) -> usize {
        hash(id) as usize % self.buckets.len()
    }

    ///////////////////////////////
    /// Add an entry at the head of its bucket chain. A repeated id shadows the earlier entry
    pub fn insert(&mut self, id: &[u8], trim: Option<usize>) -> Result<(), Error> {
        let bucket = self.bucket_of(id);
        self.entries
            .try_reserve(1)
            .map_err(|_| Error::table_allocation(self.buckets.len()))?;

        let index = self.entries.len();
        self.entries.push(R1ReadEntry {
            id: id.to_vec(),
            trim,
            next: self.buckets[bucket],
        });
        self.buckets[bucket] = Some(index);
        Ok(())
    }

    fn position(&self, id: &[u8]) -> Option<usize> {
        let mut current = self.buckets[self.bucket_of(id)];
        while let Some(index) = current {
            let entry = &self.entries[index];
            if entry.id == id {
                return Some(index);
            }
            current = entry.next;
        }
        None
    }

    pub fn get(&self, id: &[u8]) -> Option<&R1ReadEntry> {
        self.position(id).map(|index| &self.entries[index])
    }

    pub fn get_mut(&mut self, id: &[u8]) -> Option<&mut R1ReadEntry> {
        self.position(id).map(move |index| &mut self.entries[index])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn num_buckets(&self) -> usize {
        self.buckets.len()
    }

    /// Length of the longest bucket chain
    pub fn longest_chain(&self) -> usize {
        self.buckets
            .iter()
            .map(|head| {
                let mut len = 0;
                let mut current = *head;
                while let Some(index) = current {
                    len += 1;
                    current = self.entries[index].next;
                }
                len
            })
            .max()
            .unwrap_or(0)
    }
}
