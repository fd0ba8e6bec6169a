use crate::prediction::{ClassificationResult, Classifier, PredictError};
use std::{
    sync::{
        Arc,
        mpsc::{self, Receiver, Sender, TryRecvError},
    },
    thread,
};

pub(crate) enum JobMessage {
    Classified(ClassificationOutcome),
}

#[derive(Debug)]
pub(crate) struct ClassificationJob {
    pub(crate) request_id: u64,
    pub(crate) text: String,
}

#[derive(Debug)]
pub(crate) struct ClassificationOutcome {
    pub(crate) request_id: u64,
    pub(crate) result: Result<ClassificationResult, PredictError>,
}

/// Background work owned by the controller.
///
/// At most one classification is tracked at a time. A request is identified by
/// its id; outcomes for any other id are stale and must be dropped by the caller.
pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    next_request_id: u64,
    in_flight: Option<u64>,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            next_request_id: 1,
            in_flight: None,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(super) fn classification_in_progress(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Spawn the outbound call and return its request id.
    pub(super) fn begin_classification(
        &mut self,
        classifier: Arc<dyn Classifier>,
        text: String,
    ) -> u64 {
        let request_id = self.next_request_id;
        self.next_request_id = self.next_request_id.wrapping_add(1).max(1);
        self.in_flight = Some(request_id);
        let job = ClassificationJob { request_id, text };
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = classifier.predict(&job.text);
            let _ = tx.send(JobMessage::Classified(ClassificationOutcome {
                request_id: job.request_id,
                result,
            }));
        });
        request_id
    }

    /// Stop tracking the in-flight request; its outcome will be treated as stale.
    pub(super) fn abandon_classification(&mut self) -> Option<u64> {
        self.in_flight.take()
    }

    /// Mark `request_id` settled, returning false when it is not the tracked request.
    pub(super) fn settle_classification(&mut self, request_id: u64) -> bool {
        if self.in_flight == Some(request_id) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }
}
