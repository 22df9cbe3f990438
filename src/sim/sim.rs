use crate::error::{SimError, SimResult};
use crate::event::{Event, clearance_duration};
use crate::plane::{AtcId, CallSign, Plane, RequestKind, Size};
use crate::record::RequestRecord;
use crate::runway::{RunwayId, RunwayPool};
use crate::scheduler::EventQueue;
use crate::time::Time;
use crate::wait_list::WaitList;
use std::fmt;
use std::io::{BufRead, Lines, Write};
use tabled::Tabled;

const DELIMITER_WIDTH: usize = 20;

/// End-of-run report data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub runways: u32,
    pub wasted_minutes: u64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "#".repeat(DELIMITER_WIDTH);
        writeln!(f, "{rule}")?;
        writeln!(f, "The simulation has ended")?;
        writeln!(f, "The number of runways was {}", self.runways)?;
        writeln!(
            f,
            "The total amount of time wasted because runways were not available was {} minutes",
            self.wasted_minutes
        )?;
        write!(f, "{rule}")
    }
}

/// One granted runway clearance, recorded for the `--stats` table.
#[derive(Debug, Clone, Tabled)]
pub struct ClearanceReport {
    #[tabled(rename = "ATC ID")]
    pub atc_id: AtcId,
    #[tabled(rename = "Call sign")]
    pub call_sign: CallSign,
    #[tabled(rename = "Flight")]
    pub flight_number: u32,
    #[tabled(rename = "Size")]
    pub size: Size,
    #[tabled(rename = "Request")]
    pub request: RequestKind,
    #[tabled(rename = "Requested")]
    pub requested_at: Time,
    #[tabled(rename = "Cleared")]
    pub cleared_at: Time,
    #[tabled(rename = "Runway")]
    pub runway: RunwayId,
    #[tabled(rename = "Waited")]
    pub waited_minutes: u64,
}

/// The event loop tying the scheduler, the wait list and the runway pool
/// together. Request records are pulled from `source` lazily (one on startup,
/// then exactly one more per request event handled), so file order interleaves
/// with in-flight clearances the way the tower would see it.
pub struct Simulation<R> {
    source: Lines<R>,
    runway_count: u32,
    runways: RunwayPool,
    scheduler: EventQueue,
    wait_list: WaitList,
    current_time: Time,
    total_wasted: u64,
    next_atc_id: AtcId,
    reports: Vec<ClearanceReport>,
}

impl<R: BufRead> Simulation<R> {
    pub fn new(runway_count: u32, source: R) -> Self {
        Simulation {
            source: source.lines(),
            runway_count,
            runways: RunwayPool::new(runway_count),
            scheduler: EventQueue::new(),
            wait_list: WaitList::new(),
            current_time: Time(0),
            total_wasted: 0,
            next_atc_id: 1,
            reports: Vec::new(),
        }
    }

    /// Drives the simulation to completion, writing one log line per
    /// dispatched event. The loop ends once the record stream is exhausted
    /// and every in-flight chain has reached its completion.
    pub fn run<W: Write>(&mut self, out: &mut W) -> SimResult<Summary> {
        if let Some(request) = self.next_request()? {
            self.scheduler.enqueue(request);
        }
        while let Some(event) = self.scheduler.dequeue() {
            self.current_time = event.time();
            writeln!(out, "{event}")?;
            self.dispatch(event)?;
        }
        Ok(self.summary())
    }

    pub fn summary(&self) -> Summary {
        Summary {
            runways: self.runway_count,
            wasted_minutes: self.total_wasted,
        }
    }

    pub fn total_wasted_minutes(&self) -> u64 {
        self.total_wasted
    }

    /// Clearances granted so far, in grant order.
    pub fn reports(&self) -> &[ClearanceReport] {
        &self.reports
    }

    fn dispatch(&mut self, event: Event) -> SimResult<()> {
        match event {
            Event::RequestLanding { plane, .. } | Event::RequestTakeoff { plane, .. } => {
                self.handle_request(plane)
            }
            Event::Landing { time, plane, runway } | Event::Takeoff { time, plane, runway } => {
                self.handle_action(time, plane, runway);
                Ok(())
            }
            Event::Complete { runway, .. } => self.handle_complete(runway),
        }
    }

    /// A plane calls in. It always joins the wait list first; if a runway is
    /// free, whoever is at the front of the list (usually the caller itself)
    /// is cleared onto it. One assignment per request, then one more record
    /// is read so the stream stays exactly one request ahead.
    fn handle_request(&mut self, plane: Plane) -> SimResult<()> {
        self.wait_list.enqueue(plane);
        if let Some(runway) = self.runways.first_unoccupied() {
            // Non-empty by construction: the caller was enqueued just above.
            let next = self.wait_list.dequeue().ok_or(SimError::EmptyQueue)?;
            self.runways.assign(runway)?;
            let clearance = self.grant(next, runway);
            self.scheduler.enqueue(clearance);
        }
        if let Some(request) = self.next_request()? {
            self.scheduler.enqueue(request);
        }
        Ok(())
    }

    /// A clearance starts. The runway was already marked occupied when the
    /// clearance was granted; all that is left is to schedule the moment the
    /// plane will be done with it.
    fn handle_action(&mut self, time: Time, plane: Plane, runway: RunwayId) {
        let busy_for = clearance_duration(plane.request, plane.size);
        self.scheduler
            .enqueue(Event::complete(time + busy_for, plane, runway));
    }

    /// A plane clears its runway. The freed runway goes straight to the next
    /// waiter, if any, and the minutes that waiter spent holding are added to
    /// the wasted-time tally.
    fn handle_complete(&mut self, runway: RunwayId) -> SimResult<()> {
        self.runways.clear(runway)?;
        if let Some(plane) = self.wait_list.dequeue() {
            self.runways.assign(runway)?;
            self.total_wasted += (self.current_time - plane.request_time).0;
            let clearance = self.grant(plane, runway);
            self.scheduler.enqueue(clearance);
        }
        Ok(())
    }

    fn grant(&mut self, plane: Plane, runway: RunwayId) -> Event {
        self.reports.push(ClearanceReport {
            atc_id: plane.atc_id,
            call_sign: plane.call_sign.clone(),
            flight_number: plane.flight_number,
            size: plane.size,
            request: plane.request,
            requested_at: plane.request_time,
            cleared_at: self.current_time,
            runway,
            waited_minutes: (self.current_time - plane.request_time).0,
        });
        Event::action(self.current_time, plane, runway)
    }

    /// Reads and parses one record, admitting its plane with the next ATC ID.
    /// `None` once the stream is exhausted.
    fn next_request(&mut self) -> SimResult<Option<Event>> {
        let Some(line) = self.source.next() else {
            return Ok(None);
        };
        let record: RequestRecord = line?.parse()?;
        Ok(Some(Event::request(self.admit(record))))
    }

    fn admit(&mut self, record: RequestRecord) -> Plane {
        let atc_id = self.next_atc_id;
        self.next_atc_id += 1;
        Plane {
            atc_id,
            call_sign: record.call_sign,
            flight_number: record.flight_number,
            size: record.size,
            request: record.kind,
            request_time: record.time,
        }
    }
}
