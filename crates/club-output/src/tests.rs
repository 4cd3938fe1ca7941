//! Integration tests for club-output.

#[cfg(test)]
mod text_tests {
    use club_core::{ClientName, ClockTime, DayConfig, Span, TableId};
    use club_sim::{ClientEvent, Club, EventCode, EventKind};

    use crate::row::{ProfitRow, TranscriptLine};
    use crate::text::TextWriter;
    use crate::writer::ReportWriter;
    use crate::ReportObserver;

    fn at(hh: u32, mm: u32) -> ClockTime {
        ClockTime::from_hm(hh, mm).unwrap()
    }

    fn ev(hh: u32, mm: u32, client: &str, kind: EventKind) -> ClientEvent {
        ClientEvent::new(at(hh, mm), ClientName::parse(client).unwrap(), kind)
    }

    fn render(config: DayConfig, events: &[ClientEvent]) -> String {
        let mut obs = ReportObserver::new(TextWriter::new(Vec::new()));
        Club::new(config).run(events, &mut obs);
        assert!(obs.take_error().is_none());
        String::from_utf8(obs.into_writer().into_inner()).unwrap()
    }

    #[test]
    fn line_formats() {
        let name = ClientName::parse("bob").unwrap();
        let sit = TranscriptLine::Event {
            at:     at(9, 5),
            code:   EventCode::Sat,
            client: name.clone(),
            table:  Some(TableId(2)),
        };
        let left = TranscriptLine::Event { at: at(9, 5), code: EventCode::Left, client: name, table: None };
        let error = TranscriptLine::Error { at: at(9, 5), message: "PlaceIsBusy".into() };
        let row = ProfitRow { table: TableId(3), revenue: 90, occupied: Span(545) };

        assert_eq!(TranscriptLine::Time(at(8, 0)).to_string(), "08:00");
        assert_eq!(sit.to_string(), "09:05 2 bob 2");
        assert_eq!(left.to_string(), "09:05 4 bob");
        assert_eq!(error.to_string(), "09:05 13 PlaceIsBusy");
        assert_eq!(error.at(), at(9, 5));
        assert_eq!(row.to_string(), "3 90 09:05");
    }

    #[test]
    fn one_table_day() {
        let config = DayConfig { tables: 1, opening: at(8, 0), closing: at(12, 0), hourly_rate: 10 };
        let events = [
            ev(8, 10, "a", EventKind::Arrive),
            ev(8, 10, "a", EventKind::Sit(TableId(1))),
            ev(9, 0, "b", EventKind::Arrive),
            ev(9, 5, "b", EventKind::Wait),
            ev(10, 0, "a", EventKind::Leave),
        ];
        let expected = "\
08:00
08:10 1 a
08:10 2 a 1
09:00 1 b
09:05 3 b
10:00 4 a
10:00 12 b 1
12:00 11 b
12:00
1 40 03:50
";
        assert_eq!(render(config, &events), expected);
    }

    #[test]
    fn three_table_day_bills_total_time() {
        let config = DayConfig { tables: 3, opening: at(9, 0), closing: at(19, 0), hourly_rate: 10 };
        let events = [
            ev(8, 48, "client1", EventKind::Arrive),
            ev(9, 41, "client1", EventKind::Arrive),
            ev(9, 48, "client2", EventKind::Arrive),
            ev(9, 52, "client1", EventKind::Wait),
            ev(9, 54, "client1", EventKind::Sit(TableId(1))),
            ev(10, 25, "client2", EventKind::Sit(TableId(2))),
            ev(10, 58, "client3", EventKind::Arrive),
            ev(10, 59, "client3", EventKind::Sit(TableId(3))),
            ev(11, 30, "client4", EventKind::Arrive),
            ev(11, 35, "client4", EventKind::Sit(TableId(2))),
            ev(11, 45, "client4", EventKind::Wait),
            ev(12, 33, "client1", EventKind::Leave),
            ev(12, 43, "client2", EventKind::Leave),
            ev(15, 52, "client4", EventKind::Leave),
        ];
        let expected = "\
09:00
08:48 1 client1
08:48 13 NotOpenYet
09:41 1 client1
09:48 1 client2
09:52 3 client1
09:52 13 ICanWaitNoLonger!
09:54 2 client1 1
10:25 2 client2 2
10:58 1 client3
10:59 2 client3 3
11:30 1 client4
11:35 2 client4 2
11:35 13 PlaceIsBusy
11:45 3 client4
12:33 4 client1
12:33 12 client4 1
12:43 4 client2
15:52 4 client4
19:00 11 client3
19:00
1 60 05:58
2 30 02:18
3 90 08:01
";
        assert_eq!(render(config, &events), expected);
    }

    #[test]
    fn finish_is_idempotent() {
        let mut w = TextWriter::new(Vec::new());
        w.write_line(&TranscriptLine::Time(at(8, 0))).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
        assert_eq!(w.into_inner(), b"08:00\n");
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use club_core::{ClientName, ClockTime, Span, TableId};
    use club_sim::EventCode;

    use crate::csv::CsvWriter;
    use crate::row::{ProfitRow, TranscriptLine};
    use crate::writer::ReportWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn at(hh: u32, mm: u32) -> ClockTime {
        ClockTime::from_hm(hh, mm).unwrap()
    }

    fn records(path: std::path::PathBuf) -> Vec<Vec<String>> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records()
            .map(|r| r.unwrap().iter().map(str::to_owned).collect())
            .collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("transcript.csv").exists());
        assert!(dir.path().join("profits.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("transcript.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["time", "code", "client", "table", "message"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("profits.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["table", "revenue", "occupied"]);
    }

    #[test]
    fn csv_transcript_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_line(&TranscriptLine::Time(at(9, 0))).unwrap();
        w.write_line(&TranscriptLine::Event {
            at:     at(9, 10),
            code:   EventCode::Sat,
            client: ClientName::parse("ann").unwrap(),
            table:  Some(TableId(2)),
        })
        .unwrap();
        w.write_line(&TranscriptLine::Error { at: at(9, 11), message: "PlaceIsBusy".into() })
            .unwrap();
        w.finish().unwrap();

        let rows = records(dir.path().join("transcript.csv"));
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], ["09:00", "", "", "", ""]);
        assert_eq!(rows[1], ["09:10", "2", "ann", "2", ""]);
        assert_eq!(rows[2], ["09:11", "13", "", "", "PlaceIsBusy"]);
    }

    #[test]
    fn csv_profit_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_profit(&ProfitRow { table: TableId(1), revenue: 70, occupied: Span(358) }).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        let rows = records(dir.path().join("profits.csv"));
        assert_eq!(rows, [["1", "70", "05:58"]]);
    }
}

#[cfg(test)]
mod observer_tests {
    use club_core::{ClockTime, DayConfig};
    use club_sim::Club;

    use crate::row::{ProfitRow, TranscriptLine};
    use crate::text::TextWriter;
    use crate::writer::{ReportWriter, Tee};
    use crate::{OutputError, OutputResult, ReportObserver};

    /// Fails every write with an I/O error and counts the attempts.
    #[derive(Default)]
    struct Broken {
        calls: usize,
    }

    impl ReportWriter for Broken {
        fn write_line(&mut self, _line: &TranscriptLine) -> OutputResult<()> {
            self.calls += 1;
            Err(std::io::Error::other(format!("write {}", self.calls)).into())
        }
        fn write_profit(&mut self, _row: &ProfitRow) -> OutputResult<()> {
            self.calls += 1;
            Err(std::io::Error::other("profit").into())
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    fn config() -> DayConfig {
        DayConfig {
            tables:      2,
            opening:     ClockTime::from_hm(8, 0).unwrap(),
            closing:     ClockTime::from_hm(9, 0).unwrap(),
            hourly_rate: 1,
        }
    }

    #[test]
    fn keeps_first_error_only() {
        let mut obs = ReportObserver::new(Broken::default());
        Club::new(config()).run(&[], &mut obs);
        match obs.take_error() {
            Some(OutputError::Io(e)) => assert_eq!(e.to_string(), "write 1"),
            other => panic!("expected first I/O error, got {other:?}"),
        }
        assert!(obs.take_error().is_none());
        // Opening, closing, two profits: every write was still attempted.
        assert_eq!(obs.into_writer().calls, 4);
    }

    #[test]
    fn tee_writes_both_and_reports_failure() {
        let tee = Tee::new(TextWriter::new(Vec::new()), Broken::default());
        let mut obs = ReportObserver::new(tee);
        Club::new(config()).run(&[], &mut obs);
        assert!(obs.take_error().is_some());

        let (text, broken) = obs.into_writer().into_inner();
        assert_eq!(String::from_utf8(text.into_inner()).unwrap(), "08:00\n09:00\n1 0 00:00\n2 0 00:00\n");
        assert_eq!(broken.calls, 4);
    }

    #[test]
    fn absent_backend_writes_nothing() {
        let tee = Tee::new(TextWriter::new(Vec::new()), None::<Broken>);
        let mut obs = ReportObserver::new(tee);
        Club::new(config()).run(&[], &mut obs);
        assert!(obs.take_error().is_none());
    }
}
