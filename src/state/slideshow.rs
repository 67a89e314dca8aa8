// Auto-advancing slideshow position
use std::rc::Rc;
use yew::Reducible;

#[derive(Default, Debug, Clone, PartialEq)]
pub struct Slideshow {
    pub len: usize,
    pub current: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideAction {
    Next,
    Show(usize),
    /// Slide list changed; keeps the position if it is still valid.
    Resize(usize),
}

impl Slideshow {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    /// Wraps to the first slide after the last. An empty show stays at 0.
    pub fn next(&mut self) {
        if self.len == 0 {
            self.current = 0;
            return;
        }
        self.current = (self.current + 1) % self.len;
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.len > 0 && index == self.current
    }
}

impl Reducible for Slideshow {
    type Action = SlideAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            SlideAction::Next => new.next(),
            SlideAction::Show(i) => {
                if i < new.len {
                    new.current = i;
                }
            }
            SlideAction::Resize(len) => {
                new.len = len;
                if new.current >= len {
                    new.current = 0;
                }
            }
        }
        if new == *self {
            return self;
        }
        Rc::new(new)
    }
}
