use crate::types::Node;

/// One slot of the tree arena.
///
/// `element` is `None` only while the slot sits on the free list; every slot
/// reachable from the root holds an element.
#[derive(Clone, Debug)]
pub struct BstNode<T> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    element: Option<T>,
}

impl<T> BstNode<T> {
    pub fn new(element: T, p: Option<u32>) -> Self {
        Self {
            p,
            l: None,
            r: None,
            element: Some(element),
        }
    }

    pub fn element(&self) -> &T {
        self.element.as_ref().expect("reachable arena slot holds an element")
    }

    pub(crate) fn element_mut(&mut self) -> &mut T {
        self.element.as_mut().expect("reachable arena slot holds an element")
    }

    pub(crate) fn replace_element(&mut self, element: T) -> T {
        self.element
            .replace(element)
            .expect("reachable arena slot holds an element")
    }

    pub(crate) fn take_element(&mut self) -> T {
        self.element.take().expect("released slot held an element")
    }

    pub(crate) fn refill(&mut self, element: T, p: Option<u32>) {
        self.p = p;
        self.l = None;
        self.r = None;
        self.element = Some(element);
    }
}

impl<T> Node for BstNode<T> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}
