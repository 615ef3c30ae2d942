/// A backtracking cursor over any iterator. Items are buffered as they are
/// pulled so the scanner can peek and rewind; `ignore`/`extract` drop
/// everything consumed so far.
pub struct Scanner<I: Iterator> where I::Item: Clone {
    src: I,
    buf: Vec<I::Item>,
    pos: isize,
}

impl<I> Iterator for Scanner<I> where I: Iterator, I::Item: Clone {
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        self.pos += 1;
        self.prep_buffer();
        let blen = self.buf.len() as isize;
        if self.pos >= blen {
            self.pos = blen;
        }
        self.curr()
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone {
    pub fn new(source: I) -> Scanner<I> {
        Scanner{src: source, buf: Vec::new(), pos: -1}
    }

    pub fn buffer_pos(&self) -> isize { self.pos }

    pub fn set_buffer_pos(&mut self, pos: isize) -> bool {
        if pos < -1 || pos > (self.buf.len() as isize) {
            return false;
        }
        self.pos = pos;
        true
    }

    pub fn curr(&self) -> Option<I::Item> {
        let pos = self.pos as usize;
        if self.pos < 0 || pos >= self.buf.len() {
            return None;
        }
        Some(self.buf[pos].clone())
    }

    // try to get enough elements in the buffer for self.pos
    fn prep_buffer(&mut self) {
        while self.pos >= (self.buf.len() as isize) {
            if let Some(tok) = self.src.next() {
                self.buf.push(tok);
            } else {
                break;
            }
        }
    }

    pub fn peek(&mut self) -> Option<I::Item> {
        let backtrack = self.pos;
        let peeked = self.next();
        self.pos = backtrack;
        peeked
    }

    /// Everything consumed since the last `ignore`/`extract`.
    pub fn view(&self) -> &[I::Item] {
        let n = ((self.pos + 1) as usize).min(self.buf.len());
        &self.buf[..n]
    }

    pub fn ignore(&mut self) {
        if self.pos >= 0 {
            let n = (self.pos + 1) as usize;
            self.buf = if self.buf.len() > n {
                self.buf[n..].to_vec()
            } else {
                Vec::new()
            }
        }
        self.pos = -1;
    }

    pub fn extract(&mut self) -> Vec<I::Item> {
        let tokens = self.view().to_vec();
        self.ignore();
        tokens
    }

    // Advance only if the next item satisfies 'pred',
    // self.curr() will return the matched item
    pub fn accept_if<P>(&mut self, pred: P) -> Option<I::Item>
            where P: Fn(&I::Item) -> bool {
        let backtrack = self.buffer_pos();
        if let Some(next) = self.next() {
            if pred(&next) { return Some(next); }
        }
        self.set_buffer_pos(backtrack);
        None
    }

    // Skip over items matching 'pred', result is if the scanner was advanced
    pub fn skip_all<P>(&mut self, pred: P) -> bool
            where P: Fn(&I::Item) -> bool {
        let mut advanced = false;
        while self.accept_if(&pred).is_some() { advanced = true; }
        advanced
    }

    // Advance until the next item matches 'pred' or EOF, return if the
    // scanner advanced. Afterwards self.curr() is the last non-matching item
    pub fn until<P>(&mut self, pred: P) -> bool
            where P: Fn(&I::Item) -> bool {
        let mut advanced = false;
        while let Some(next) = self.peek() {
            if pred(&next) { break; }
            self.next();
            advanced = true;
        }
        advanced
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone + PartialEq {
    // Advance the scanner only if the next item is in the 'any' set
    pub fn accept_any(&mut self, any: &[I::Item]) -> Option<I::Item> {
        self.accept_if(|next| any.contains(next))
    }
}
