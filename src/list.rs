//! Append-only singly-linked record lists
//!
//! Both lists own their nodes through `head`. Teardown walks the chain once,
//! detaching each node's `next` before the node itself is dropped, so long
//! chains never recurse in `Drop`.

use std::ptr::NonNull;

use crate::error::Result;
use crate::record::Record;
use crate::store::RecordStore;

struct Node {
    record: Record,
    next: Option<Box<Node>>,
}

impl Node {
    fn boxed(record: Record) -> Box<Self> {
        Box::new(Self { record, next: None })
    }
}

/// Iterator over a chain, head first
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.record
        })
    }
}

/// Drop every node reachable from `head`, returning how many there were
fn release_chain(head: &mut Option<Box<Node>>) -> usize {
    let mut released = 0;
    let mut cursor = head.take();
    while let Some(mut node) = cursor {
        // Hang on to the rest of the chain before this node goes away
        cursor = node.next.take();
        drop(node);
        released += 1;
    }
    released
}

/// Linked list tracking only its head; every append walks to the end
#[derive(Default)]
pub struct ScanList {
    head: Option<Box<Node>>,
    len: usize,
}

impl ScanList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl RecordStore for ScanList {
    fn insert(&mut self, record: Record) -> Result<()> {
        let mut slot = &mut self.head;
        while let Some(node) = slot {
            slot = &mut node.next;
        }
        *slot = Some(Node::boxed(record));
        self.len += 1;
        Ok(())
    }

    fn len(&self) -> usize {
        self.len
    }

    fn records(&self) -> Box<dyn Iterator<Item = &Record> + '_> {
        Box::new(self.iter())
    }

    fn release(&mut self) -> usize {
        self.len = 0;
        release_chain(&mut self.head)
    }
}

impl Drop for ScanList {
    fn drop(&mut self) {
        self.release();
    }
}

/// Linked list with a non-owning reference to its last node
#[derive(Default)]
pub struct TailList {
    head: Option<Box<Node>>,
    /// Last node reachable from `head`, `None` exactly when the list is empty
    tail: Option<NonNull<Node>>,
    len: usize,
}

impl TailList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// The most recently appended record
    pub fn last(&self) -> Option<&Record> {
        // SAFETY: `tail` always points at a node owned through `head`, which
        // lives as long as `&self`.
        self.tail.map(|tail| unsafe { &tail.as_ref().record })
    }
}

impl RecordStore for TailList {
    fn insert(&mut self, record: Record) -> Result<()> {
        let mut node = Node::boxed(record);
        // The node sits on the heap, so this address survives moving the Box
        let new_tail = NonNull::from(node.as_mut());

        match self.tail {
            // SAFETY: `tail` is the last node of the chain we own, and
            // `&mut self` guarantees no other reference into the chain exists.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }

        self.tail = Some(new_tail);
        self.len += 1;
        Ok(())
    }

    fn len(&self) -> usize {
        self.len
    }

    fn records(&self) -> Box<dyn Iterator<Item = &Record> + '_> {
        Box::new(self.iter())
    }

    fn release(&mut self) -> usize {
        self.tail = None;
        self.len = 0;
        release_chain(&mut self.head)
    }
}

impl Drop for TailList {
    fn drop(&mut self) {
        self.release();
    }
}
