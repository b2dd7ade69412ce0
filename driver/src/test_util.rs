use {
    crate::transport::Transport,
    std::{collections::VecDeque, fmt},
};

#[derive(Debug)]
pub(crate) struct Unplugged;

impl fmt::Display for Unplugged {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unplugged")
    }
}

#[derive(Debug)]
enum Event {
    Send(Vec<u8>),
    Receive { count: usize, reply: Vec<u8> },
    SendFails,
    ReceiveFails { count: usize },
}

/// A transport that expects exactly the scripted exchange, in order, and nothing more.
pub(crate) struct Script {
    events: VecDeque<Event>,
}

impl Script {
    #[inline]
    pub(crate) fn new() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    #[inline]
    pub(crate) fn expect_send(mut self, bytes: &[u8]) -> Self {
        self.events.push_back(Event::Send(bytes.to_vec()));
        self
    }

    /// Expects a request for `count` bytes and answers with `reply`, which may be shorter.
    #[inline]
    pub(crate) fn expect_receive(mut self, count: usize, reply: &[u8]) -> Self {
        assert!(reply.len() <= count, "Scripted reply longer than the request");
        self.events.push_back(Event::Receive {
            count,
            reply: reply.to_vec(),
        });
        self
    }

    #[inline]
    pub(crate) fn fail_send(mut self) -> Self {
        self.events.push_back(Event::SendFails);
        self
    }

    #[inline]
    pub(crate) fn fail_receive(mut self, count: usize) -> Self {
        self.events.push_back(Event::ReceiveFails { count });
        self
    }
}

impl Transport for Script {
    type SendError = Unplugged;
    type RecvError = Unplugged;

    #[inline]
    fn send(&mut self, bytes: &[u8]) -> Result<(), Unplugged> {
        match self.events.pop_front() {
            Some(Event::Send(expected)) => {
                assert_eq!(
                    bytes, expected,
                    "Sent `{bytes:02X?}` but expected `{expected:02X?}`",
                );
                Ok(())
            }
            Some(Event::SendFails) => Err(Unplugged),
            other => panic!("Unexpected send of `{bytes:02X?}` (next scripted: {other:02X?})"),
        }
    }

    #[inline]
    fn receive(&mut self, buffer: &mut [u8]) -> Result<usize, Unplugged> {
        match self.events.pop_front() {
            Some(Event::Receive { count, reply }) => {
                assert_eq!(buffer.len(), count, "Asked for the wrong number of bytes");
                buffer[..reply.len()].copy_from_slice(&reply);
                Ok(reply.len())
            }
            Some(Event::ReceiveFails { count }) => {
                assert_eq!(buffer.len(), count, "Asked for the wrong number of bytes");
                Err(Unplugged)
            }
            other => panic!(
                "Unexpected receive of {} bytes (next scripted: {other:02X?})",
                buffer.len(),
            ),
        }
    }
}

impl Drop for Script {
    #[inline]
    fn drop(&mut self) {
        if !std::thread::panicking() {
            assert!(
                self.events.is_empty(),
                "Scripted events never happened: {:02X?}",
                self.events,
            );
        }
    }
}
