// Navigation sidebar open/closed state
use std::rc::Rc;
use yew::Reducible;

#[derive(Default, Debug, Clone, PartialEq)]
pub struct SidebarState {
    pub open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarAction {
    Toggle,
    Close,
}

impl Reducible for SidebarState {
    type Action = SidebarAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = match action {
            SidebarAction::Toggle => !self.open,
            SidebarAction::Close => false,
        };
        if open == self.open {
            return self;
        }
        Rc::new(SidebarState { open })
    }
}
