use crate::scanner::Scanner;

impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    pub fn skip_ws(&mut self) -> bool {
        self.skip_all(|c| c.is_whitespace())
    }

    // discard whitespace and anything consumed before it
    pub fn ignore_ws(&mut self) {
        self.skip_ws();
        self.ignore();
    }
}

///////////////////////////////////////////////////////////////////////////////
