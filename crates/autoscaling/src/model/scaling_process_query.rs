use std::fmt;

use super::ScalingProcess;

/// Both `SuspendProcesses` and `ResumeProcesses` take the same `ScalingProcessQuery` input
/// shape, so the request types are generated from one definition.
macro_rules! scaling_process_query {
    ($($(#[$attr:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$attr])*
            #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
            pub struct $name {
                auto_scaling_group_name: Option<String>,
                scaling_processes: Option<Vec<ScalingProcess>>,
            }

            impl $name {
                pub const fn new() -> Self {
                    Self {
                        auto_scaling_group_name: None,
                        scaling_processes: None,
                    }
                }

                /// The name of the Auto Scaling group.
                pub fn auto_scaling_group_name(&self) -> Option<&str> {
                    self.auto_scaling_group_name.as_deref()
                }

                pub fn set_auto_scaling_group_name(&mut self, name: impl Into<String>) {
                    self.auto_scaling_group_name = Some(name.into());
                }

                pub fn set_auto_scaling_group_name_opt(&mut self, name: Option<String>) {
                    self.auto_scaling_group_name = name;
                }

                pub fn with_auto_scaling_group_name(
                    &mut self,
                    name: impl Into<String>,
                ) -> &mut Self {
                    self.set_auto_scaling_group_name(name);
                    self
                }

                /// The processes to act on. Unset means every process, while a present but
                /// empty list means none.
                pub fn scaling_processes(&self) -> Option<&[ScalingProcess]> {
                    self.scaling_processes.as_deref()
                }

                pub fn set_scaling_processes<I>(&mut self, processes: I)
                where
                    I: IntoIterator,
                    I::Item: Into<ScalingProcess>,
                {
                    self.scaling_processes = Some(processes.into_iter().map(Into::into).collect());
                }

                pub fn set_scaling_processes_opt(
                    &mut self,
                    processes: Option<Vec<ScalingProcess>>,
                ) {
                    self.scaling_processes = processes;
                }

                pub fn with_scaling_processes<I>(&mut self, processes: I) -> &mut Self
                where
                    I: IntoIterator,
                    I::Item: Into<ScalingProcess>,
                {
                    self.set_scaling_processes(processes);
                    self
                }

                /// Appends a single process, creating the list if it was unset.
                pub fn add_scaling_process(
                    &mut self,
                    process: impl Into<ScalingProcess>,
                ) -> &mut Self {
                    self.scaling_processes
                        .get_or_insert_with(Vec::new)
                        .push(process.into());
                    self
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    aws_wire::display::display_fields(f)
                        .field("AutoScalingGroupName", self.auto_scaling_group_name())
                        .list("ScalingProcesses", self.scaling_processes())
                        .finish()
                }
            }

            impl aws_wire::QueryStruct for $name {
                fn write_members(&self, writer: &mut aws_wire::QueryWriter<'_>) {
                    writer
                        .value("AutoScalingGroupName", self.auto_scaling_group_name())
                        .list("ScalingProcesses", self.scaling_processes());
                }
            }
        )*
    };
}

scaling_process_query! {
    /// Input for `SuspendProcesses`, which suspends processes on an Auto Scaling group.
    SuspendProcessesRequest,
    /// Input for `ResumeProcesses`, which resumes processes previously suspended on an Auto
    /// Scaling group.
    ResumeProcessesRequest,
}
