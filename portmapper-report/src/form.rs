//! Registration form payload

use portmapper_protocols::lldp::SwitchTopology;

/// The key-value payload POSTed to the provisioning endpoint.
///
/// Field order and key names are fixed by the server-side script, including
/// the `devideid` spelling. Values are concatenated as-is; the endpoint's
/// parser predates percent-encoding and callers are responsible for keeping
/// `&` and `=` out of their inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisioningReport {
    pub room_number: String,
    pub jack: String,
    pub switch_id: String,
    pub port_id: String,
    pub gigabit: bool,
    pub user: String,
    pub pass: String,
}

impl ProvisioningReport {
    /// Assemble a report from extracted topology facts and caller-supplied
    /// identifiers
    pub fn new(
        room_number: &str,
        jack: &str,
        topology: &SwitchTopology,
        user: &str,
        pass: &str,
    ) -> Self {
        Self {
            room_number: room_number.to_string(),
            jack: jack.to_string(),
            switch_id: topology.switch_name.clone(),
            port_id: topology.port.clone(),
            gigabit: topology.gigabit,
            user: user.to_string(),
            pass: pass.to_string(),
        }
    }

    /// Serialize to the URL-encoded form body the endpoint expects
    pub fn to_form_body(&self) -> String {
        format!(
            "roomnumber={}&jack={}&devideid={}&portid={}&gigabit={}&user={}&pass={}",
            self.room_number,
            self.jack,
            self.switch_id,
            self.port_id,
            if self.gigabit { "1" } else { "0" },
            self.user,
            self.pass,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_body_golden() {
        let report = ProvisioningReport {
            room_number: "101".to_string(),
            jack: "J1".to_string(),
            switch_id: "SW1".to_string(),
            port_id: "24".to_string(),
            gigabit: true,
            user: "u".to_string(),
            pass: "p".to_string(),
        };

        assert_eq!(
            report.to_form_body(),
            "roomnumber=101&jack=J1&devideid=SW1&portid=24&gigabit=1&user=u&pass=p"
        );
    }

    #[test]
    fn test_form_body_gigabit_flag() {
        let mut report = ProvisioningReport {
            room_number: "12".to_string(),
            jack: "B".to_string(),
            switch_id: "sw-bldg-2".to_string(),
            port_id: "7".to_string(),
            gigabit: false,
            user: "student".to_string(),
            pass: "secret".to_string(),
        };
        assert!(report.to_form_body().contains("&gigabit=0&"));

        report.gigabit = true;
        assert!(report.to_form_body().contains("&gigabit=1&"));
    }

    #[test]
    fn test_from_topology() {
        let topology = SwitchTopology {
            switch_name: "SwitchName".to_string(),
            port: "24".to_string(),
            gigabit: true,
        };
        let report = ProvisioningReport::new("101", "J1", &topology, "u", "p");
        assert_eq!(report.switch_id, "SwitchName");
        assert_eq!(report.port_id, "24");
        assert!(report.gigabit);
    }
}
