/// Naive trie supporting dynamic insertion, used to build a [`Trie`](crate::Trie).
///
/// Children are kept sorted by label, so a breadth-first walk visits
/// the children of each node in ascending label order.
#[derive(Debug, Default)]
pub struct TrieBuilder<T> {
    children: Vec<(T, Box<TrieBuilder<T>>)>,
    terminal: bool,
}

impl<T> TrieBuilder<T> {
    pub fn new() -> TrieBuilder<T> {
        TrieBuilder {
            children: Vec::new(),
            terminal: false,
        }
    }

    pub fn children(&self) -> &Vec<(T, Box<Self>)> {
        &self.children
    }

    pub fn terminal(&self) -> bool {
        self.terminal
    }
}

impl<T: Ord + Clone> TrieBuilder<T> {
    pub fn insert<K: AsRef<[T]>>(&mut self, key: K) {
        let mut t = self;
        for c in key.as_ref() {
            let pos = match t.children.binary_search_by(|(c2, _)| c2.cmp(c)) {
                Ok(pos) => pos,
                Err(pos) => {
                    t.children
                        .insert(pos, (c.clone(), Box::new(TrieBuilder::new())));
                    pos
                }
            };
            t = &mut { t }.children[pos].1;
        }
        t.terminal = true;
    }
}
