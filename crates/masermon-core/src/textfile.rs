use std::fs;
use std::io;
use std::path::PathBuf;

/// Publishes metric groups as node_exporter textfile-collector files.
///
/// Each group is written in full to a temporary path next to the final file
/// and then renamed onto it, so a scraper never observes a partial file:
/// either the previous snapshot or the new one, nothing in between.
#[derive(Debug, Clone)]
pub struct TextfilePublisher {
    dir: PathBuf,
    prefix: String,
}

impl TextfilePublisher {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
        }
    }

    /// Final path for a metric group.
    pub fn path_for(&self, group: &str) -> PathBuf {
        self.dir.join(format!("{}_{}.prom", self.prefix, group))
    }

    /// Atomically replace the group's file with `body`.
    pub fn publish(&self, group: &str, body: &str) -> io::Result<()> {
        let final_path = self.path_for(group);
        // The temp file must share the final file's directory: rename is
        // only a single atomic syscall within one filesystem.
        let tmp_path = self.dir.join(format!("{}_{}.prom.tmp", self.prefix, group));
        fs::write(&tmp_path, body)?;
        fs::rename(&tmp_path, &final_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_writes_full_body_to_final_path() {
        let dir = tempfile::tempdir().unwrap();
        let publisher = TextfilePublisher::new(dir.path(), "maser");

        publisher
            .publish("status1", "maser_info{name=\"MASER001\"} 1\n")
            .unwrap();

        let contents = fs::read_to_string(dir.path().join("maser_status1.prom")).unwrap();
        assert_eq!(contents, "maser_info{name=\"MASER001\"} 1\n");
    }

    #[test]
    fn publish_is_idempotent_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let publisher = TextfilePublisher::new(dir.path(), "maser");
        let body = "maser_currents_p28 123.45\n";

        publisher.publish("currents", body).unwrap();
        let first = fs::read(publisher.path_for("currents")).unwrap();
        publisher.publish("currents", body).unwrap();
        let second = fs::read(publisher.path_for("currents")).unwrap();

        assert_eq!(first, second);
        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["maser_currents.prom".to_string()]);
    }

    #[test]
    fn snapshot_swap_never_truncates_in_place() {
        // The final path is only ever touched by the rename, so a poller
        // sees the old snapshot or the new one, never a shorter file.
        let dir = tempfile::tempdir().unwrap();
        let publisher = TextfilePublisher::new(dir.path(), "maser");

        let long_body = "maser_voltages_p28 1\n".repeat(50);
        publisher.publish("voltages", &long_body).unwrap();
        publisher.publish("voltages", "maser_voltages_p28 2\n").unwrap();

        let contents = fs::read_to_string(publisher.path_for("voltages")).unwrap();
        assert_eq!(contents, "maser_voltages_p28 2\n");

        // Temp path is colocated with the final path and gone after the
        // swap.
        let tmp = dir.path().join("maser_voltages.prom.tmp");
        assert_eq!(tmp.parent(), publisher.path_for("voltages").parent());
        assert!(!tmp.exists());
    }

    #[test]
    fn republish_overwrites_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let publisher = TextfilePublisher::new(dir.path(), "maser");

        publisher.publish("status2", "maser_dac1_channel 1\n").unwrap();
        publisher.publish("status2", "maser_dac1_channel 2\n").unwrap();

        let contents = fs::read_to_string(publisher.path_for("status2")).unwrap();
        assert_eq!(contents, "maser_dac1_channel 2\n");
    }
}
