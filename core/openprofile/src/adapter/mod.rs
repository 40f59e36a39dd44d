pub(crate) mod plutil_dump_source;
pub(crate) mod stdout_feedback_sink;

pub(crate) use plutil_dump_source::PlutilDumpSource;
pub(crate) use stdout_feedback_sink::StdoutFeedbackSink;
