use utoipa::OpenApi;

use crate::modules::classrooms::model::{
    Classroom, ClassroomRow, CreateClassroomDto, PaginatedClassroomsResponse, UpdateClassroomDto,
};
use crate::modules::courses::model::{
    Course, CourseRow, CreateCourseDto, PaginatedCoursesResponse, UpdateCourseDto,
};
use crate::modules::departments::model::{
    CreateDepartmentDto, Department, DepartmentRow, PaginatedDepartmentsResponse,
    UpdateDepartmentDto,
};
use crate::modules::enrollments::model::{
    CreateEnrollmentDto, Enrollment, EnrollmentRow, PaginatedEnrollmentsResponse,
    UpdateEnrollmentDto,
};
use crate::modules::students::model::{
    CreateStudentDto, PaginatedStudentsResponse, Student, StudentRow, UpdateStudentDto,
};
use crate::modules::teachers::model::{
    CreateTeacherDto, PaginatedTeachersResponse, Teacher, TeacherRow, UpdateTeacherDto,
};
use crate::modules::users::model::{
    CreateUserDto, PaginatedUsersResponse, UpdateUserDto, User, UserAdminRow,
};
use crate::modules::{BulkActionResponse, ErrorResponse, MessageResponse, SelectedIdsDto};
use crate::utils::links::RecordLinks;
use crate::utils::pagination::{PaginationMeta, PaginationParams};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::get_user,
        crate::modules::users::controller::update_user,
        crate::modules::users::controller::delete_user,
        crate::modules::departments::controller::create_department,
        crate::modules::departments::controller::get_departments,
        crate::modules::departments::controller::get_department,
        crate::modules::departments::controller::update_department,
        crate::modules::departments::controller::delete_department,
        crate::modules::departments::controller::uppercase_departments,
        crate::modules::teachers::controller::create_teacher,
        crate::modules::teachers::controller::get_teachers,
        crate::modules::teachers::controller::get_teacher,
        crate::modules::teachers::controller::update_teacher,
        crate::modules::teachers::controller::delete_teacher,
        crate::modules::teachers::controller::uppercase_teachers,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::get_student,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::delete_student,
        crate::modules::students::controller::uppercase_students,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::get_courses,
        crate::modules::courses::controller::get_course,
        crate::modules::courses::controller::update_course,
        crate::modules::courses::controller::delete_course,
        crate::modules::courses::controller::uppercase_courses,
        crate::modules::classrooms::controller::create_classroom,
        crate::modules::classrooms::controller::get_classrooms,
        crate::modules::classrooms::controller::get_large_classrooms,
        crate::modules::classrooms::controller::get_classroom,
        crate::modules::classrooms::controller::update_classroom,
        crate::modules::classrooms::controller::delete_classroom,
        crate::modules::classrooms::controller::uppercase_classrooms,
        crate::modules::enrollments::controller::create_enrollment,
        crate::modules::enrollments::controller::get_enrollments,
        crate::modules::enrollments::controller::get_enrollment,
        crate::modules::enrollments::controller::update_enrollment,
        crate::modules::enrollments::controller::delete_enrollment,
    ),
    components(
        schemas(
            User,
            CreateUserDto,
            UpdateUserDto,
            UserAdminRow,
            PaginatedUsersResponse,
            Department,
            CreateDepartmentDto,
            UpdateDepartmentDto,
            DepartmentRow,
            PaginatedDepartmentsResponse,
            Teacher,
            CreateTeacherDto,
            UpdateTeacherDto,
            TeacherRow,
            PaginatedTeachersResponse,
            Student,
            CreateStudentDto,
            UpdateStudentDto,
            StudentRow,
            PaginatedStudentsResponse,
            Course,
            CreateCourseDto,
            UpdateCourseDto,
            CourseRow,
            PaginatedCoursesResponse,
            Classroom,
            CreateClassroomDto,
            UpdateClassroomDto,
            ClassroomRow,
            PaginatedClassroomsResponse,
            Enrollment,
            CreateEnrollmentDto,
            UpdateEnrollmentDto,
            EnrollmentRow,
            PaginatedEnrollmentsResponse,
            RecordLinks,
            PaginationMeta,
            PaginationParams,
            ErrorResponse,
            MessageResponse,
            BulkActionResponse,
            SelectedIdsDto,
        )
    ),
    tags(
        (name = "Users", description = "Phone-number-keyed user accounts"),
        (name = "Departments", description = "Academic departments"),
        (name = "Teachers", description = "Teaching staff"),
        (name = "Students", description = "Enrolled students"),
        (name = "Courses", description = "Course catalog"),
        (name = "Classrooms", description = "Rooms and capacities"),
        (name = "Enrollments", description = "Student-course enrollments"),
    ),
    info(
        title = "Campus API",
        description = "School-administration data management backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
