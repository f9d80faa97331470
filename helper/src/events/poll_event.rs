use std::io::{Error, ErrorKind, Result};
use std::pin::Pin;
use std::task::{Context, Poll};

use crossterm::event::{Event, EventStream};
use futures::Stream;
use pin_project::pin_project;

/// Terminal event source for a `select!` loop.
#[derive(Default)]
pub struct PollEvent {
  inner: EventStream,
}

impl PollEvent {
  /// Resolves with the next terminal event. Cancel safe.
  pub fn next(&mut self) -> NextEvent<'_> {
    NextEvent { stream: &mut self.inner }
  }
}

#[pin_project]
pub struct NextEvent<'s> {
  #[pin]
  stream: &'s mut EventStream,
}

impl Future for NextEvent<'_> {
  type Output = Result<Event>;

  fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
    match self.project().stream.poll_next(cx) {
      Poll::Ready(Some(event)) => Poll::Ready(event),
      Poll::Ready(None) => Poll::Ready(Err(Error::new(ErrorKind::UnexpectedEof, "terminal event stream closed"))),
      Poll::Pending => Poll::Pending,
    }
  }
}
